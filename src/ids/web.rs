//! App Service IDs.
//!
//! Web apps and function apps share the `sites` shape with plain app
//! services but are kept as separate types.

use crate::Segment;
use crate::constants::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

define_resource_id! {
    /// An App Service plan.
    AppServicePlanId("App Service Plan") {
        subscription_id,
        resource_group_name,
        server_farm_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Web"),
        Segment::fixed("serverFarms"),
        Segment::user_specified("server_farm_name", "serverFarmValue"),
    ]
}

define_resource_id! {
    /// An App Service environment.
    AppServiceEnvironmentId("App Service Environment") {
        subscription_id,
        resource_group_name,
        hosting_environment_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Web"),
        Segment::fixed("hostingEnvironments"),
        Segment::user_specified("hosting_environment_name", "hostingEnvironmentValue"),
    ]
}

define_resource_id! {
    /// An App Service site of any kind.
    AppServiceId("App Service") {
        subscription_id,
        resource_group_name,
        site_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Web"),
        Segment::fixed("sites"),
        Segment::user_specified("site_name", "siteValue"),
    ]
}

define_resource_id! {
    /// A web app.
    WebAppId("Web App") {
        subscription_id,
        resource_group_name,
        site_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Web"),
        Segment::fixed("sites"),
        Segment::user_specified("site_name", "siteValue"),
    ]
}

define_resource_id! {
    /// A function app.
    FunctionAppId("Function App") {
        subscription_id,
        resource_group_name,
        site_name,
    }
    shape: [
        Segment::fixed(SUBSCRIPTIONS),
        Segment::subscription_id("subscription_id"),
        Segment::fixed(RESOURCE_GROUPS),
        Segment::resource_group_name("resource_group_name"),
        Segment::fixed(PROVIDERS),
        Segment::provider("Microsoft.Web"),
        Segment::fixed("sites"),
        Segment::user_specified("site_name", "siteValue"),
    ]
}

impl From<WebAppId> for AppServiceId {
    fn from(id: WebAppId) -> Self {
        Self::new(id.subscription_id, id.resource_group_name, id.site_name)
    }
}

impl From<FunctionAppId> for AppServiceId {
    fn from(id: FunctionAppId) -> Self {
        Self::new(id.subscription_id, id.resource_group_name, id.site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/sites/app1";

    #[test]
    fn same_shape_distinct_types() {
        let web = WebAppId::parse(SITE).unwrap();
        let function = FunctionAppId::parse(SITE).unwrap();
        assert_eq!(web.id(), function.id());
        assert_eq!(AppServiceId::from(web), AppServiceId::from(function));
    }

    #[test]
    fn plan_keyword_is_server_farms() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Web/serverfarms/plan1";
        assert!(AppServicePlanId::parse(input).is_err());
        let id = AppServicePlanId::parse_insensitively(input).unwrap();
        assert!(id.id().ends_with("/serverFarms/plan1"));
    }
}
