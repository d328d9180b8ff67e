//! Session left in `localStorage` by the login page, read once at startup.

use crate::shared::storage;
use contracts::system::session::Session;
use leptos::prelude::*;

pub fn provide_session() {
    let session = Session::load(storage::get_item);
    log::debug!(
        "session: user {:?}, authorities {:?}",
        session.user_id,
        session.authorities
    );
    provide_context(session);
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in context")
}
