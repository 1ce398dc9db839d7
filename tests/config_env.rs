// tests/config_env.rs
use std::env;

use clap::Parser;
use so2slack::config::{Cli, Config, ENV_SLACK_KEY, ENV_SO_KEY};
use so2slack::ConfigError;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("so2slack").chain(args.iter().copied()))
}

#[serial_test::serial]
#[test]
fn missing_slack_key_is_fatal() {
    env::remove_var(ENV_SLACK_KEY);
    let err = Config::from_env(cli(&[])).unwrap_err();
    assert_eq!(err, ConfigError::MissingEnv("SLACK_KEY"));

    env::set_var(ENV_SLACK_KEY, "   ");
    assert!(Config::from_env(cli(&[])).is_err());
    env::remove_var(ENV_SLACK_KEY);
}

#[serial_test::serial]
#[test]
fn so_key_is_optional() {
    env::set_var(ENV_SLACK_KEY, "xoxb-test");
    env::remove_var(ENV_SO_KEY);
    let cfg = Config::from_env(cli(&[])).unwrap();
    assert_eq!(cfg.slack_key, "xoxb-test");
    assert_eq!(cfg.so_key, None);

    env::set_var(ENV_SO_KEY, "se-key");
    let cfg = Config::from_env(cli(&[])).unwrap();
    assert_eq!(cfg.so_key.as_deref(), Some("se-key"));

    env::remove_var(ENV_SO_KEY);
    env::remove_var(ENV_SLACK_KEY);
}

#[test]
fn defaults_route_python_to_python_every_minute() {
    let cfg = Config::from_lookup(cli(&[]), |_| Some("xoxb".into())).unwrap();
    assert_eq!(cfg.settings.tag, "python");
    assert_eq!(cfg.settings.channel, "python");
    assert_eq!(cfg.settings.freq, std::time::Duration::from_secs(60));
    assert_eq!(cfg.settings.bot.username, "lazy_lizard");
    assert_eq!(cfg.settings.bot.icon_emoji, ":robot_face:");
}

#[test]
fn tag_picks_channel() {
    let cfg = Config::from_lookup(cli(&["--tag", "scikit-learn"]), |_| Some("x".into())).unwrap();
    assert_eq!(cfg.settings.channel, "scikit-learn");
    let cfg = Config::from_lookup(cli(&["--tag", "rust"]), |_| Some("x".into())).unwrap();
    assert_eq!(cfg.settings.channel, "random");
}

#[test]
fn non_positive_freq_is_rejected() {
    for bad in ["--freq=0", "--freq=-1"] {
        let res = Config::from_lookup(cli(&[bad]), |_| Some("x".into()));
        assert!(matches!(res, Err(ConfigError::InvalidFreq(_))), "freq {bad}");
    }
}

#[test]
fn out_of_range_freq_is_rejected_not_panicking() {
    for bad in ["--freq=1e300", "--freq=1e20"] {
        let res = Config::from_lookup(cli(&[bad]), |_| Some("x".into()));
        assert!(matches!(res, Err(ConfigError::InvalidFreq(_))), "freq {bad}");
    }
}
