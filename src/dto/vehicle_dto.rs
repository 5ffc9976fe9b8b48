use serde::Serialize;

use crate::models::part::PartRow;
use crate::models::transaction::TransactionParty;
use crate::models::vehicle::VehicleRow;
use crate::repositories::filter_option_repository::{
    ColorOption, ManufacturerOption, VehicleTypeOption,
};

// Full detail for one vehicle: row, parts, both transaction sides, and the
// computed business decision
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    pub vehicle: VehicleRow,
    pub parts: Vec<PartRow>,
    pub seller: Option<TransactionParty>,
    pub buyer: Option<TransactionParty>,
    pub eligible_for_sale: bool,
}

// Values available for the filter controls
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub manufacturers: Vec<ManufacturerOption>,
    pub vehicle_types: Vec<VehicleTypeOption>,
    pub model_years: Vec<i32>,
    pub fuel_types: Vec<String>,
    pub colors: Vec<ColorOption>,
}
