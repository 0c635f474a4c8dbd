use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetDailyStatsParam {
    /// yyyy-MM-dd
    pub date: String,
}
