use super::{PathSegments, QueryError, QueryPath};
use crate::syntax::NodeRef;

/// Resolve `path` against the sibling list starting at `head`, lexing each
/// segment only when the walk reaches it.
///
/// `head` is normally the first forest root. The walk stops at the first
/// segment without a match, so a malformed tail after a miss gives
/// `Ok(None)`. An empty path is always an error.
pub fn find<'c>(head: Option<NodeRef<'c>>, path: &str) -> Result<Option<NodeRef<'c>>, QueryError> {
    let mut segments = PathSegments::new(path);
    let mut segment = segments.next().ok_or(QueryError::Empty)??;

    let mut head = head;
    loop {
        let Some(found) = scan(head, segment) else {
            tracing::trace!("No node named {:?} in current list", segment);
            return Ok(None);
        };
        match segments.next() {
            None => return Ok(Some(found)),
            Some(next) => {
                tracing::trace!("Descending into {:?}", segment);
                segment = next?;
                head = found.children().next();
            }
        }
    }
}

/// Walk `path` segment by segment.
///
/// Each segment is matched against the current sibling list; every segment
/// but the last descends into the match's children. The walk stops at the
/// first segment without a match.
pub fn resolve<'c>(head: Option<NodeRef<'c>>, path: &QueryPath<'_>) -> Option<NodeRef<'c>> {
    let (last, walk) = path.segments().split_last()?;

    let mut head = head;
    for segment in walk {
        let Some(found) = scan(head, segment) else {
            tracing::trace!("No node named {:?} in current list", segment);
            return None;
        };
        tracing::trace!("Descending into {:?}", segment);
        head = found.children().next();
    }

    scan(head, last)
}

/// First node named `name` in the sibling list starting at `head`.
fn scan<'c>(head: Option<NodeRef<'c>>, name: &str) -> Option<NodeRef<'c>> {
    let head = head?;
    std::iter::once(head)
        .chain(head.following_siblings())
        .find(|node| node.name() == name)
}
