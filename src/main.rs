// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use fieldhint::config::{load_and_validate_config, VisibilityConfig};
use fieldhint::engine::MessageEngine;
use fieldhint::field::stub::StubForm;
use fieldhint::field::ErrorSet;
use fieldhint::registry::{detail_field, GlobalMessages, MessageTemplate};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let global = Arc::new(GlobalMessages::new());
    if let Some(config_file) = args.get(1) {
        let config = load_and_validate_config(config_file)?;
        config.apply(&global);
        println!("📋 Loaded application messages from {}", config_file);
    }

    println!("🧾 Validation Message Demo");
    println!("══════════════════════════");
    println!();

    let mut form = StubForm::new();
    let email = form.add("email");
    let password = form.add("password");

    // Each field gets its own engine; both share the application layer
    let email_engine = MessageEngine::new(Arc::clone(&global));
    let password_engine = MessageEngine::new(Arc::clone(&global));

    password_engine.override_message(
        "minlength",
        MessageTemplate::rendered(|detail| {
            Ok(format!(
                "Password needs at least {} characters",
                detail_field(detail, "requiredLength")?
            ))
        }),
    );

    email_engine.set_sink(|display| {
        println!("  [email]    visible={} text=\"{}\"", display.visible, display.text);
    });
    password_engine.set_sink(|display| {
        println!("  [password] visible={} text=\"{}\"", display.visible, display.text);
    });

    email_engine.attach_named(&form, "email")?;
    password_engine.attach_named(&form, "password")?;

    println!("👆 User focuses the email field and leaves it empty...");
    email.set_errors([("required".to_string(), json!({}))].into_iter().collect());
    email.set_touched(true);

    println!();
    println!("⌨️  User types a malformed address...");
    email.set_errors([("email".to_string(), json!({}))].into_iter().collect());

    println!();
    println!("⌨️  User types a short password...");
    password.set_touched(true);
    password.set_errors(
        [("minlength".to_string(), json!({"requiredLength": 12, "actualLength": 5}))]
            .into_iter()
            .collect(),
    );

    println!();
    println!("✅ User fixes both fields...");
    email.set_errors(ErrorSet::new());
    password.set_errors(ErrorSet::new());

    println!();
    println!("🔧 Relaxing visibility: messages show before first blur...");
    email_engine.set_visibility(VisibilityConfig {
        require_touched: false,
        require_dirty: false,
    });
    email.set_touched(false);
    email.set_errors([("required".to_string(), json!({}))].into_iter().collect());

    email_engine.detach();
    password_engine.detach();

    println!();
    println!("🎉 Demo complete!");
    Ok(())
}
