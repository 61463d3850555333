pub mod conversion;

pub use conversion::{
    ConversionOutput, ConversionStatistics, GuideConverter, GuideEntities,
    run_conversion,
};
