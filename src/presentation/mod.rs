pub mod creator;
pub mod detail;
pub mod overview;
pub mod route;

pub use creator::{CreatorVariant, ListCreator};
pub use detail::DetailView;
pub use overview::{render, render_by, render_text, ListRow};
pub use route::Route;
