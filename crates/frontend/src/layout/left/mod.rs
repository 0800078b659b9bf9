mod left;
mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;
