use crate::domain::store::ListStore;
use crate::domain::todo_list::NewList;
use crate::error::{Result, TodoError};
use crate::presentation::{self, CreatorVariant, DetailView, ListCreator, ListRow, Route};

/// What the application is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Detail(DetailView),
    NotFound(String),
}

/// Top-level composition: owns the store and wires it to the views.
///
/// Every mutation goes through `App`, which recomputes the sorted overview
/// right after the store changes.
#[derive(Debug)]
pub struct App {
    store: ListStore,
    creator: ListCreator,
    overview: Vec<ListRow>,
    screen: Screen,
}

impl App {
    pub fn new(store: ListStore, variant: CreatorVariant) -> Self {
        let overview = presentation::render(store.lists());
        Self {
            store,
            creator: ListCreator::new(variant),
            overview,
            screen: Screen::Overview,
        }
    }

    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Sorted rows as of the last mutation
    pub fn overview(&self) -> &[ListRow] {
        &self.overview
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn creator(&self) -> &ListCreator {
        &self.creator
    }

    pub fn creator_mut(&mut self) -> &mut ListCreator {
        &mut self.creator
    }

    /// Confirms the creation form and adds the resulting list.
    ///
    /// Returns `Ok(false)` if the form was not open.
    pub fn submit(&mut self) -> Result<bool> {
        match self.creator.confirm() {
            Some(new_list) => {
                self.add_list(new_list)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn add_list(&mut self, new_list: NewList) -> Result<()> {
        self.store.add_list(new_list)?;
        self.rerender();
        Ok(())
    }

    /// Switches screens. A list route mounts a fresh detail view.
    pub fn navigate(&mut self, route: Route) -> &Screen {
        self.screen = match route {
            Route::Overview => Screen::Overview,
            Route::List(title) => match DetailView::mount(&self.store, &title) {
                Ok(view) => Screen::Detail(view),
                Err(TodoError::ListNotFound(missing)) => {
                    tracing::debug!(title = %missing, "no list for route");
                    Screen::NotFound(missing)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "detail view failed to mount");
                    Screen::NotFound(title)
                }
            },
        };
        &self.screen
    }

    /// Parses a path and navigates to it
    pub fn navigate_path(&mut self, path: &str) -> Result<&Screen> {
        let route = Route::parse(path)?;
        Ok(self.navigate(route))
    }

    /// Activates the overview row at `index`
    pub fn click(&mut self, index: usize) -> Option<&Screen> {
        let target = self.overview.get(index)?.target.clone();
        Some(self.navigate(target))
    }

    fn rerender(&mut self) {
        self.overview = presentation::render(self.store.lists());
    }
}
