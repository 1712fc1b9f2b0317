pub(crate) mod assets_errors;
pub(crate) mod assets_model;
pub(crate) mod assets_repository;
pub(crate) mod assets_resolver;
pub(crate) mod assets_service;
pub(crate) mod assets_traits;

pub use assets_errors::AssetError;
pub use assets_model::{
    AssetFilter, AssetKind, AssetQuery, AssetRef, AssetState, AssetSummary, AvailabilityState,
    Computer, ComputerDB, ComputerUpdate, Device, DeviceDB, DeviceUpdate, HolderSummary,
    NewComputer, NewDevice, NewPhoneLine, PhoneLine, PhoneLineDB, PhoneLineUpdate,
};
pub use assets_repository::{ComputerRepository, DeviceRepository, PhoneLineRepository};
pub use assets_resolver::AssetResolver;
pub use assets_service::AssetService;
pub use assets_traits::AssetResolverTrait;
