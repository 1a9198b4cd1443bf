use std::env;
use std::fs;
use std::path::PathBuf;

const SECRETS: [(&str, &str); 4] = [
    ("WIFI_SSID", "YOUR OWN VALUE"),
    ("WIFI_PASS", "YOUR OWN VALUE"),
    // please use @BotFather to create a bot and add it to the group/channel
    ("BOT_TOKEN", "YOUR OWN VALUE"),
    // please use @myidbot "/getgroupid" to find the group/channel id
    ("TG_CHAT_ID", "YOUR OWN VALUE"),
];

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::build::CfgArgs::output_propagated("ESP_IDF").unwrap();
        embuild::espidf::sysenv::output();
    }

    let mut generated = String::new();
    for (name, fallback) in SECRETS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = env::var(name).unwrap_or_else(|_| fallback.to_string());
        generated.push_str(&format!("pub const {name}: &str = {value:?};\n"));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("app_config.rs"), generated).unwrap();

    println!("cargo:rerun-if-changed=sdkconfig.defaults");
}
