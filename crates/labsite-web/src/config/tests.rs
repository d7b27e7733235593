#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.export.out_dir, PathBuf::from("out"));
        assert!(config.export.trailing_slash);
        assert_eq!(config.site.lab_name, "Prof. Debnarayan Jana Lab");
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = Config::from_toml_str(
            r##"
[server]
bind = "0.0.0.0:8080"

[site]
lab_name = "Optics Lab"

[site.brand]
primary_accent = "#10b981"

[export]
base_path = "/prof-lab"
trailing_slash = false
"##,
        )
        .unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.site.lab_name, "Optics Lab");
        assert_eq!(config.site.brand.primary_accent, "#10b981");
        assert_eq!(config.site.brand.bg, "#0b1020");
        assert_eq!(config.export.base_path, "/prof-lab");
        assert!(!config.export.trailing_slash);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = Config::from_toml_str("[server]\nbind = \"0.0.0.0:1\"\n").unwrap();
        config.apply_overrides(|key| match key {
            "LABSITE_BIND" => Some("127.0.0.1:9999".to_string()),
            "LABSITE_BASE_PATH" => Some("repo/".to_string()),
            _ => None,
        });
        config.validate().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:9999");
        assert_eq!(config.export.base_path, "/repo");
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path("").unwrap(), "");
        assert_eq!(normalize_base_path("/").unwrap(), "");
        assert_eq!(normalize_base_path("prof-lab").unwrap(), "/prof-lab");
        assert_eq!(normalize_base_path("/a/b/").unwrap(), "/a/b");
        assert!(normalize_base_path("/a b").is_err());
        assert!(normalize_base_path("/a//b").is_err());
    }

    #[test]
    fn test_invalid_brand_rejected() {
        let mut config = Config::from_toml_str("[site.brand]\nbg = \"navy\"\n").unwrap();
        assert!(matches!(config.validate(), Err(LabsiteError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        assert!(matches!(
            Config::from_toml_str("[server\nbind = 1"),
            Err(LabsiteError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::from_path("/definitely/not/here/labsite.toml").unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_catalog_defaults_to_demo() {
        let config = Config::default();
        assert_eq!(config.catalog().unwrap(), Catalog::demo());
    }
}
