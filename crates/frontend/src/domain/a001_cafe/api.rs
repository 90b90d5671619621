use contracts::domain::a001_cafe::aggregate::{Cafe, CafeDto, UpdateCafeCommand};

use crate::shared::api_utils::encode_segment;
use crate::shared::gateway::{Gateway, GatewayError, HttpRequest, Transport};

/// Fetch all cafés
pub async fn fetch_all<T: Transport>(gateway: &Gateway<T>) -> Result<Vec<Cafe>, GatewayError> {
    gateway
        .fetch(HttpRequest::get("/cafes/all"))
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Fetch one café by id
pub async fn fetch_by_id<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
) -> Result<Cafe, GatewayError> {
    gateway
        .fetch(HttpRequest::get(format!("/cafes/cafe/{}", encode_segment(id))))
        .await?
        .ok_or(GatewayError::NotFound)
}

/// Create a café; returns the record with its assigned id
pub async fn create<T: Transport>(
    gateway: &Gateway<T>,
    dto: &CafeDto,
) -> Result<Cafe, GatewayError> {
    gateway
        .fetch(HttpRequest::post("/cafes/cafe", dto)?)
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Replace the editable fields of a café.
///
/// The backend answers with a bare boolean here (unlike employees, which
/// return the record). An empty 2xx body counts as `true`.
pub async fn update<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
    command: &UpdateCafeCommand,
) -> Result<bool, GatewayError> {
    let path = format!("/cafes/cafe?id={}", encode_segment(id));
    Ok(gateway
        .fetch::<bool>(HttpRequest::put(path, command)?)
        .await?
        .unwrap_or(true))
}

/// Delete a café
pub async fn delete<T: Transport>(gateway: &Gateway<T>, id: &str) -> Result<(), GatewayError> {
    gateway
        .execute(HttpRequest::delete(format!(
            "/cafes/cafe/{}",
            encode_segment(id)
        )))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::testing::RecordingTransport;
    use crate::shared::gateway::Method;
    use contracts::domain::a001_cafe::aggregate::PLACEHOLDER_LOGO;
    use futures::executor::block_on;

    fn gateway() -> Gateway<RecordingTransport> {
        Gateway::new(RecordingTransport::new())
    }

    #[test]
    fn fetch_all_reads_bare_array() {
        let gw = gateway();
        gw.transport().push(
            200,
            r#"[{"id":"1","name":"Central","description":"d","logo":"","location":"Main St","employeeCount":2}]"#,
        );
        let cafes = block_on(fetch_all(&gw)).unwrap();
        assert_eq!(cafes.len(), 1);
        assert_eq!(cafes[0].employee_count, 2);
        assert_eq!(gw.transport().calls(), vec![(Method::Get, "/cafes/all".to_string())]);
    }

    #[test]
    fn fetch_by_id_null_is_not_found() {
        let gw = gateway();
        gw.transport().push(200, "null");
        assert_eq!(block_on(fetch_by_id(&gw, "9")).unwrap_err(), GatewayError::NotFound);
        assert_eq!(gw.transport().calls()[0].1, "/cafes/cafe/9");
    }

    #[test]
    fn create_posts_fields_with_placeholder_logo_and_unwraps_reply() {
        let gw = gateway();
        gw.transport().push(
            200,
            r#"{"data":{"id":"c1","name":"Central","description":"Downtown spot","logo":"string.png","location":"Main St","employeeCount":0},"success":true,"message":"Created"}"#,
        );
        let dto = CafeDto::new("Central".into(), "Downtown spot".into(), "Main St".into());
        let created = block_on(create(&gw, &dto)).unwrap();
        assert_eq!(created.id, "c1");

        let body = gw.transport().last_body().unwrap();
        assert_eq!(body["name"], "Central");
        assert_eq!(body["description"], "Downtown spot");
        assert_eq!(body["location"], "Main St");
        assert_eq!(body["logo"], PLACEHOLDER_LOGO);
        assert!(body.get("id").is_none());
        assert!(body.get("employeeCount").is_none());
        assert_eq!(gw.transport().calls()[0], (Method::Post, "/cafes/cafe".to_string()));
    }

    #[test]
    fn update_uses_query_id_and_returns_bool() {
        let gw = gateway();
        gw.transport().push(200, "true");
        let cmd = CafeDto::new("Central".into(), "d".into(), "l".into()).into_update("c1");
        assert!(block_on(update(&gw, "c1", &cmd)).unwrap());
        assert_eq!(
            gw.transport().calls()[0],
            (Method::Put, "/cafes/cafe?id=c1".to_string())
        );
        assert_eq!(gw.transport().last_body().unwrap()["id"], "c1");

        gw.transport().push(200, "false");
        assert!(!block_on(update(&gw, "c1", &cmd)).unwrap());

        gw.transport().push(204, "");
        assert!(block_on(update(&gw, "c1", &cmd)).unwrap());
    }

    #[test]
    fn delete_maps_missing_record() {
        let gw = gateway();
        gw.transport().push(404, "");
        assert_eq!(block_on(delete(&gw, "c1")).unwrap_err(), GatewayError::NotFound);
        assert_eq!(
            gw.transport().calls(),
            vec![(Method::Delete, "/cafes/cafe/c1".to_string())]
        );
    }
}
