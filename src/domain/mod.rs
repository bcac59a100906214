// Domain layer - Dashboard state models, free of I/O
pub mod chart;
pub mod navigation;
pub mod prediction;
pub mod reading;
pub mod selection;
pub mod topology;
