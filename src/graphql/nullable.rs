use async_graphql::{Context, Result};

/// Resolves a nullable field to `null` on failure while still reporting the error.
///
/// Returning `Err` from a resolver makes the executor drop the field from its
/// parent object, and a document whose only root field fails comes back with
/// `data: null`. Recording the error on the context and yielding `None` keeps
/// the key in `data` with a null value and the error's `path` pointing at it.
pub trait NullOnError<T> {
    fn null_on_error(self, ctx: &Context<'_>) -> Option<T>;
}

impl<T> NullOnError<T> for Result<Option<T>> {
    fn null_on_error(self, ctx: &Context<'_>) -> Option<T> {
        match self {
            Ok(value) => value,
            Err(error) => {
                ctx.add_error(ctx.set_error_path(error.into_server_error(ctx.item.pos)));
                None
            }
        }
    }
}
