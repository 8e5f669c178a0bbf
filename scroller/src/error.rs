use alloc::string::String;

/// Errors surfaced by the scroller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The renderer asked for more items than any viewport can show, which means the scroll
    /// container is not scrolling.
    #[error(
        "rendered items limit reached ({rendered} > {limit}) in {container}: the scroller element \
         does not seem to scroll; give it a fixed height and `overflow-y: auto`"
    )]
    RenderedItemsLimit {
        rendered: usize,
        limit: usize,
        container: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
