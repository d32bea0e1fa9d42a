use super::SimpleNode;
use crate::error::ModelConversionError;

/// A trait for custom designer formats that can be converted into a `SimpleNode` tree.
///
/// The compiler only understands the canonical simplified model. Implement this
/// trait on your own structs to translate another designer's document into it.
///
/// # Example
///
/// ```rust
/// use flowcast::error::ModelConversionError;
/// use flowcast::model::{IntoSimpleModel, NodeType, SimpleNode};
///
/// // A designer that only knows straight approval chains.
/// struct ApprovalChain {
///     approvers: Vec<String>,
/// }
///
/// impl IntoSimpleModel for ApprovalChain {
///     fn into_simple_model(self) -> Result<SimpleNode, ModelConversionError> {
///         if self.approvers.is_empty() {
///             return Err(ModelConversionError::Invalid("no approvers".to_string()));
///         }
///         let tail = self
///             .approvers
///             .iter()
///             .enumerate()
///             .rev()
///             .fold(None, |next: Option<SimpleNode>, (i, who)| {
///                 let node = SimpleNode::new(&format!("approve_{}", i), NodeType::UserTask).named(who);
///                 Some(match next {
///                     Some(next) => node.then(next),
///                     None => node,
///                 })
///             });
///         let mut start = SimpleNode::new("start", NodeType::StartEvent);
///         start.child_node = tail.map(Box::new);
///         Ok(start)
///     }
/// }
///
/// let root = ApprovalChain { approvers: vec!["alice".into(), "bob".into()] }
///     .into_simple_model()
///     .unwrap();
/// assert_eq!(root.next().and_then(|n| n.present_id()), Some("approve_0"));
/// ```
pub trait IntoSimpleModel {
    /// Consumes the object and converts it into the root of a simplified model tree.
    fn into_simple_model(self) -> Result<SimpleNode, ModelConversionError>;
}

impl IntoSimpleModel for SimpleNode {
    fn into_simple_model(self) -> Result<SimpleNode, ModelConversionError> {
        Ok(self)
    }
}
