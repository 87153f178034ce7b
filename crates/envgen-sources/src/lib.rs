//! Inputs gathered from outside the redactor: the `.env` content, the
//! author and the date.

pub mod clock;
pub mod file;
pub mod git;
pub mod handler;
pub mod workspace;

pub use clock::{format_date, today};
pub use file::{MAX_FILE_SIZE, inspect, read_env_file};
pub use git::{AUTHOR_FALLBACK, GIT_TIMEOUT, GitAuthor};
pub use handler::{AuthorResolver, FixedAuthor};
pub use workspace::find_workspace_root;
