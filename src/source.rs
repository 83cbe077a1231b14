//! Data Sources
//!
//! Wraps the caller's child lookup into one asynchronous contract so the
//! rest of the tree never distinguishes a synchronous list from an async
//! backend call.

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::error::TreeError;

/// Caller-supplied child lookup.
///
/// `load` is invoked with the parent item being expanded, or `None` for
/// the forest root. Synchronous sources are wrapped into already-resolved
/// futures; async sources report failures as strings which surface as
/// [`TreeError::LoadFailed`].
pub enum TreeSource<T> {
    Sync(std::sync::Arc<dyn Fn(Option<&T>) -> Vec<T> + Send + Sync>),
    Async(std::sync::Arc<dyn Fn(Option<T>) -> LocalBoxFuture<'static, Result<Vec<T>, String>> + Send + Sync>),
}

impl<T: 'static> TreeSource<T> {
    pub fn sync(f: impl Fn(Option<&T>) -> Vec<T> + Send + Sync + 'static) -> Self {
        Self::Sync(std::sync::Arc::new(f))
    }

    pub fn from_async(
        f: impl Fn(Option<T>) -> LocalBoxFuture<'static, Result<Vec<T>, String>> + Send + Sync + 'static,
    ) -> Self {
        Self::Async(std::sync::Arc::new(f))
    }

    /// The uniform load contract. An empty result is a legitimate "no
    /// children" answer, not an error.
    pub fn load(&self, parent: Option<T>) -> LocalBoxFuture<'static, Result<Vec<T>, TreeError>> {
        match self {
            Self::Sync(f) => {
                let items = f(parent.as_ref());
                futures::future::ready(Ok(items)).boxed_local()
            }
            Self::Async(f) => {
                let fut = f(parent);
                async move { fut.await.map_err(TreeError::LoadFailed) }.boxed_local()
            }
        }
    }
}

impl<T> Clone for TreeSource<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(f) => Self::Sync(std::sync::Arc::clone(f)),
            Self::Async(f) => Self::Async(std::sync::Arc::clone(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_sync_source_resolves_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = TreeSource::sync(move |parent: Option<&String>| {
            counter.fetch_add(1, Ordering::SeqCst);
            match parent {
                Some(p) => vec![format!("{p}.1"), format!("{p}.2")],
                None => vec!["A".to_string(), "B".to_string()],
            }
        });

        let roots = block_on(source.load(None)).unwrap();
        assert_eq!(roots, vec!["A", "B"]);

        let children = block_on(source.load(Some("A".to_string()))).unwrap();
        assert_eq!(children, vec!["A.1", "A.2"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_async_source_success() {
        let source = TreeSource::from_async(|parent: Option<String>| {
            async move {
                match parent {
                    Some(p) => Ok(vec![format!("{p}.1")]),
                    None => Ok(vec!["root".to_string()]),
                }
            }
            .boxed_local()
        });

        assert_eq!(block_on(source.load(None)).unwrap(), vec!["root"]);
        assert_eq!(
            block_on(source.load(Some("root".to_string()))).unwrap(),
            vec!["root.1"]
        );
    }

    #[test]
    fn test_async_source_failure_maps_to_load_failed() {
        let source = TreeSource::from_async(|_: Option<String>| {
            async { Err("backend unreachable".to_string()) }.boxed_local()
        });

        let err = block_on(source.load(None)).unwrap_err();
        assert_eq!(err, TreeError::LoadFailed("backend unreachable".to_string()));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let source = TreeSource::sync(|_: Option<&String>| Vec::new());
        assert_eq!(block_on(source.load(None)).unwrap(), Vec::<String>::new());
    }
}
