//! Clinic catalogue endpoint.
//!
//! ```text
//! GET /services?clinicId=clinic_abc&category=vaccination
//! ```

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::LookupServicesRequest;
use crate::domain::{CatalogueView, ClinicService, ServiceCategory};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ServiceCategorySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_query_param_error};

const CLINIC_ID: FieldName = FieldName::new("clinicId");
const CATEGORY: FieldName = FieldName::new("category");

/// Query parameters accepted by the catalogue endpoint. Repeated keys are
/// allowed; the first occurrence wins.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ServicesQuery {
    /// Clinic identifier. Required; a whitespace-only value counts as absent.
    #[param(example = "clinic_abc")]
    pub clinic_id: Option<String>,
    /// Category filter. Unrecognised values return every service.
    #[param(example = "vaccination")]
    pub category: Option<String>,
}

/// A bookable service as exposed to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    /// Service id, unique within the clinic.
    #[schema(example = "svc_2")]
    pub id: String,
    /// Display name.
    #[schema(example = "Puppy Vaccination")]
    pub name: String,
    /// Price in the clinic's currency.
    #[schema(example = 900)]
    pub base_price: u32,
    /// Duration in minutes.
    #[schema(example = 20)]
    pub duration: u32,
    /// Category used for filtering.
    #[schema(value_type = ServiceCategorySchema)]
    pub category: ServiceCategory,
    /// `false` exactly when `slots` is empty.
    pub available: bool,
    /// Open slot labels.
    #[schema(example = json!(["11:00", "12:30", "15:30"]))]
    pub slots: Vec<String>,
}

impl From<ClinicService> for ServiceResponse {
    fn from(service: ClinicService) -> Self {
        Self {
            id: service.id().to_owned(),
            name: service.name().to_owned(),
            base_price: service.base_price(),
            duration: service.duration_minutes(),
            category: service.category(),
            available: service.available(),
            slots: service.slots().to_vec(),
        }
    }
}

/// Response payload for a clinic catalogue.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
    /// Clinic that was listed.
    #[schema(example = "clinic_abc")]
    pub clinic_id: String,
    /// Clinic display name.
    #[schema(example = "PawCare Clinic")]
    pub clinic_name: String,
    /// Currency code for every price in the listing.
    #[schema(example = "USD")]
    pub currency: String,
    /// Services matching the category filter.
    pub services: Vec<ServiceResponse>,
}

impl From<CatalogueView> for ServicesResponse {
    fn from(view: CatalogueView) -> Self {
        Self {
            clinic_id: view.clinic_id,
            clinic_name: view.clinic_name,
            currency: view.currency,
            services: view.services.into_iter().map(Into::into).collect(),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: FieldName) -> Option<&str> {
    pairs
        .iter()
        .find(|(name, _)| name == key.as_str())
        .map(|(_, value)| value.as_str())
}

/// List a clinic's services, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/services",
    params(ServicesQuery),
    responses(
        (status = 200, description = "Clinic catalogue", body = ServicesResponse),
        (status = 400, description = "Missing clinicId", body = ErrorSchema),
        (status = 404, description = "Clinic not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["services"],
    operation_id = "listServices"
)]
#[get("/services")]
pub async fn list_services(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(request.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let clinic_id = first_value(&pairs, CLINIC_ID)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| missing_query_param_error(CLINIC_ID))?
        .to_owned();
    let category = ServiceCategory::from_filter(first_value(&pairs, CATEGORY));

    let view = state
        .catalogue
        .lookup_services(LookupServicesRequest {
            clinic_id,
            category,
        })
        .await?;
    Ok(HttpResponse::Ok().json(ServicesResponse::from(view)))
}
