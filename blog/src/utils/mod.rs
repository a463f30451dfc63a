pub mod logger;
pub mod serializer;
