pub mod scanner;
pub mod source;

pub use scanner::ScannerCamera;
pub use source::ScannerSource;
