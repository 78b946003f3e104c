use hearth::config::{Config, LISTEN_ADDR};

#[test]
fn test_config_fixed_address() {
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.listen_addr, LISTEN_ADDR);
}

#[test]
fn test_config_ignores_environment() {
    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:9999");
    }
    let cfg = Config::load();
    unsafe {
        std::env::remove_var("LISTEN");
    }
    assert_eq!(cfg.listen_addr, LISTEN_ADDR);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
