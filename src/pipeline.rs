//! The single load → normalize → render pass behind one page.
//!
//! [`run`] never fails: every outcome, including a failed request, ends in
//! exactly one terminal [`PresenterState`](crate::presenter::PresenterState).

use tracing::{error, info, instrument};

use crate::api::NewsSource;
use crate::normalize::{Normalized, normalize};
use crate::presenter::{FeedView, Presenter};
use crate::render::Renderer;

/// Fetch the collection once and render it into `view`.
///
/// # Returns
///
/// The presenter, in a terminal state, still owning the view.
#[instrument(level = "info", skip_all)]
pub async fn run<S, V>(source: &S, renderer: &Renderer, view: V) -> Presenter<V>
where
    S: NewsSource,
    V: FeedView,
{
    let mut presenter = Presenter::new(view);
    info!("Loading news");

    let records = match source.fetch_news().await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Failed to load news");
            presenter.show_failure(&e.to_string());
            return presenter;
        }
    };

    match normalize(records) {
        Normalized::EmptySource => {
            presenter.show_empty_source();
        }
        Normalized::AllFiltered { dropped } => {
            presenter.show_empty_after_filter(dropped);
        }
        Normalized::Retained(items) => {
            presenter.show_entries(renderer.render_all(&items));
        }
    }
    presenter
}
