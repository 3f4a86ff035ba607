#![allow(clippy::unwrap_used)]
// Client construction from external configuration. `figment::Jail`
// sandboxes env vars and the working directory.

use figment::Jail;
use pretty_assertions::assert_eq;

use vmaas_api::{AuthType, Authenticator, DEFAULT_SERVICE_URL, Error, VmwareV1, VmwareV1Options};

#[test]
fn test_new_from_environment_applies_properties() {
    Jail::expect_with(|jail| {
        jail.set_env("VMWARE_URL", "https://api.eu-de.vmware.cloud.ibm.com/v1");
        jail.set_env("VMWARE_AUTH_TYPE", "bearertoken");
        jail.set_env("VMWARE_BEARER_TOKEN", "tok");
        jail.set_env("VMWARE_ENABLE_GZIP", "true");
        jail.set_env("VMWARE_ENABLE_RETRIES", "true");
        jail.set_env("VMWARE_MAX_RETRIES", "3");

        let client = VmwareV1::new_from_environment("vmware").unwrap();
        assert_eq!(
            client.service_url(),
            "https://api.eu-de.vmware.cloud.ibm.com/v1"
        );
        assert_eq!(client.authenticator().auth_type(), AuthType::BearerToken);
        assert!(client.enable_gzip_compression());
        assert_eq!(client.retry_policy().unwrap().max_retries, 3);
        Ok(())
    });
}

#[test]
fn test_new_from_environment_with_numeric_password() {
    Jail::expect_with(|jail| {
        jail.set_env("VMWARE_AUTH_TYPE", "basic");
        jail.set_env("VMWARE_USERNAME", "admin");
        jail.set_env("VMWARE_PASSWORD", "123456");

        let client = VmwareV1::new_from_environment("vmware").unwrap();
        assert_eq!(client.authenticator().auth_type(), AuthType::Basic);
        Ok(())
    });
}

#[test]
fn test_default_url_when_none_configured() {
    Jail::expect_with(|jail| {
        jail.set_env("VMWARE_AUTH_TYPE", "noauth");

        let client = VmwareV1::new(VmwareV1Options::default()).unwrap();
        assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
        assert!(client.retry_policy().is_none());
        Ok(())
    });
}

#[test]
fn test_explicit_url_wins_over_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "creds.toml",
            r#"
            [my-vmware]
            url = "https://file.example.com/v1"
            username = "admin"
            password = "secret"
            "#,
        )?;
        jail.set_env("IBM_CREDENTIALS_FILE", "creds.toml");

        let client = VmwareV1::new(
            VmwareV1Options::default()
                .with_service_name("my-vmware")
                .with_url("https://explicit.example.com/v1"),
        )
        .unwrap();

        assert_eq!(client.service_url(), "https://explicit.example.com/v1");
        assert_eq!(client.authenticator().auth_type(), AuthType::Basic);
        Ok(())
    });
}

#[test]
fn test_explicit_authenticator_with_configured_url() {
    Jail::expect_with(|jail| {
        jail.set_env("VMWARE_URL", "https://env.example.com/v1");

        let client = VmwareV1::new(
            VmwareV1Options::default().with_authenticator(Authenticator::NoAuth),
        )
        .unwrap();
        assert_eq!(client.service_url(), "https://env.example.com/v1");
        assert_eq!(client.authenticator().auth_type(), AuthType::NoAuth);
        Ok(())
    });
}

#[test]
fn test_missing_credentials_is_a_configuration_error() {
    Jail::expect_with(|_jail| {
        let err = VmwareV1::new_from_environment("unconfigured").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "got: {err:?}");
        assert!(err.response().is_none());
        Ok(())
    });
}

#[test]
fn test_unparseable_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("VMWARE_AUTH_TYPE", "noauth");
        jail.set_env("VMWARE_URL", "not a url");

        let err = VmwareV1::new_from_environment("vmware").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "got: {err:?}");
        Ok(())
    });
}
