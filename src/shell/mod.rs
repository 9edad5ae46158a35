/// Shell integration module
///
/// Shell detection, the `try init` snippets and the `cd` directive.

pub mod integration;
pub mod shell_detector;

pub use integration::{cd_directive, snippet};
pub use shell_detector::{Shell, ShellDetector};
