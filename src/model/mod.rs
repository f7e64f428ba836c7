mod edge;
mod node;
mod request;
mod workflow;

pub use edge::{ConnectionEdge, MAIN_CHANNEL, NodeConnections};
pub use node::NodeModel;
pub use request::{DEFAULT_COMPLEXITY, WorkflowRequest};
pub use workflow::{WorkflowDocument, WorkflowOutcome};
