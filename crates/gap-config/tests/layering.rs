use figment::Jail;
use gap_config::{ConfigError, GapConfig};
use gap_core::enums::ResolutionPolicy;
use pretty_assertions::assert_eq;

#[test]
fn defaults_apply_without_files_or_env() {
    Jail::expect_with(|jail| {
        let config = GapConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.engine.min_modules, 3);
        assert_eq!(config.engine.resolution_policy, ResolutionPolicy::Reset);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gapcheck")?;
        jail.create_file(
            ".gapcheck/config.toml",
            r#"
                [engine]
                min_modules = 5
                resolution_policy = "carry_forward"
                disabled_rules = ["evaluation.success_metrics"]
            "#,
        )?;

        let config = GapConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.engine.min_modules, 5);
        assert_eq!(
            config.engine.resolution_policy,
            ResolutionPolicy::CarryForward
        );
        assert_eq!(
            config.engine.disabled_rules,
            vec!["evaluation.success_metrics".to_string()]
        );
        // untouched keys keep their defaults
        assert_eq!(config.engine.min_lessons_per_module, 2);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gapcheck")?;
        jail.create_file(".gapcheck/config.toml", "[general]\ndefault_limit = 5\n")?;
        jail.set_env("GAPCHECK_GENERAL__DEFAULT_LIMIT", "50");
        jail.set_env("GAPCHECK_ENGINE__REPORT_PASSES", "true");

        let config = GapConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        assert!(config.engine.report_passes);
        Ok(())
    });
}

#[test]
fn invalid_ratio_is_rejected_at_load() {
    Jail::expect_with(|jail| {
        jail.set_env("GAPCHECK_ENGINE__LESSON_ASSESSMENT_GAP_RATIO", "2.0");

        let result = GapConfig::load_from(jail.directory());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn project_root_outside_cwd_is_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join(".gapcheck")).expect("mkdir");
    std::fs::write(
        dir.path().join(".gapcheck/config.toml"),
        "[engine]\nbattery = \"pilot\"\n",
    )
    .expect("write config");

    let config = GapConfig::figment(dir.path())
        .extract::<GapConfig>()
        .expect("config extracts");
    assert_eq!(config.engine.battery, "pilot");
}
