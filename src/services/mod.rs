mod gateway;
mod http;
#[cfg(test)]
pub mod stub;

pub use gateway::AnalysisGateway;
pub use http::HttpGateway;
