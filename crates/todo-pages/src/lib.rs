//! Page object layer for the TodoMVC tutorial suite
//!
//! Three layers, each only talking to the one below:
//!
//! - [`bot::ActionBot`] wraps a page with waiting element actions
//! - [`loadable::Loadable`] gives pages a load / is-loaded lifecycle
//! - [`todo::TodoPage`] exposes the TodoMVC app as domain operations
//!
//! Tests speak in todos, not selectors:
//!
//! ```no_run
//! use todo_pages::loadable::Loadable;
//! use todo_pages::todo::TodoPage;
//!
//! # async fn example(page: chromiumoxide::Page) -> anyhow::Result<()> {
//! let todo = TodoPage::new(page, "https://todomvc.com/examples/react/dist/");
//! todo.get().await?;
//! todo.add("walk the dog").await?;
//! todo.toggle("walk the dog").await?;
//! assert_eq!(todo.items_left().await?, 0);
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod loadable;
pub mod todo;

pub use bot::ActionBot;
pub use loadable::Loadable;
pub use todo::TodoPage;
