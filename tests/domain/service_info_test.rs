use genai_svc::domain::{SERVICE_DESCRIPTION, SERVICE_NAME, ServiceInfo};

#[test]
fn given_current_service_info_then_reports_healthy_genai_service() {
    let info = ServiceInfo::current();

    assert_eq!(info.status, "healthy");
    assert_eq!(info.service, SERVICE_NAME);
    assert_eq!(info.version, "0.1.0");
    assert_eq!(info.description, SERVICE_DESCRIPTION);
}

#[test]
fn given_two_calls_when_reading_service_info_then_values_are_equal() {
    assert_eq!(ServiceInfo::current(), ServiceInfo::current());
}
