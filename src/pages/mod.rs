//! Page controllers.
//!
//! Each page does what its web counterpart did on mount: read the session, fetch what
//! it shows, and report problems through the [`Ui`](crate::ui::Ui). Errors never
//! leave a page; callers get a view model or a placeholder.

mod account;
mod cards;
mod dashboard;
mod incident;

pub use account::*;
pub use cards::*;
pub use dashboard::*;
pub use incident::*;

/// What a page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<T> {
    /// Nothing to show yet
    Loading,
    Ready(T),
}

impl<T> PageView<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            PageView::Ready(value) => Some(value),
            PageView::Loading => None,
        }
    }
}
