mod generator;
pub use generator::Generator;

mod mode;
pub use mode::Mode;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
