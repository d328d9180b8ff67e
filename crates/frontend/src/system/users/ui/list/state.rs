use contracts::system::users::User;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 50;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<User>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "login".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    pub fn recalc_pagination(&mut self) {
        self.total_pages = self.total_count.div_ceil(self.page_size).max(1);
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_current_page() {
        let mut state = UsersListState {
            total_count: 101,
            page: 9,
            ..UsersListState::default()
        };
        state.recalc_pagination();
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.page, 2);

        state.total_count = 0;
        state.recalc_pagination();
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }
}
