//! Estimation core - the deterministic cost pipeline
//!
//! Three stages, evaluated top to bottom for each request:
//!
//! 1. [`bus_count::estimate_bus_count`] - equipment-based electrical bus
//!    count under the chosen redundancy tier
//! 2. [`allocation::allocate_categories`] - optional IT/Mechanical/House
//!    split of the bus count for competitive pricing
//! 3. [`quote::aggregate`] - manhour and cost aggregation into a [`Quotation`]
//!
//! Every stage is a pure function over immutable inputs. The surrounding
//! CLI gathers parameters and renders the result; nothing in here touches
//! the filesystem except [`request::EstimateRequest::load`].

pub mod adjustments;
pub mod allocation;
pub mod ancillary;
pub mod bus_count;
pub mod equipment;
pub mod facility;
pub mod labor;
pub mod quote;
pub mod request;
pub mod studies;

pub use adjustments::{CostAdjustments, CustomerType, DeliveryType, ModelConfig, ReportComplexity};
pub use allocation::{allocate_categories, CategorySplit, MechRedundancy};
pub use ancillary::{AncillaryCosts, CostLine};
pub use bus_count::estimate_bus_count;
pub use equipment::EquipmentBlocks;
pub use facility::{FacilityProfile, Tier};
pub use labor::{LaborBreakdown, LaborModel, LaborRates, WorkAllocation};
pub use quote::{aggregate, AggregationInput, Quotation, StudyLine};
pub use request::{EstimateRequest, RequestError};
pub use studies::{StudyCatalog, StudyKind, StudyPricing, StudySelection};
