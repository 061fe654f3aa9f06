use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use tracing::debug;
use wikiref_refs::{
    DocumentReferenceResolver, EntityReferenceSerializer, ObjectReferenceCodec, ReferenceConfig,
    StringReferenceResolver, StringReferenceSerializer,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let output = match cli.command {
        Command::Encode(args) => cmd_encode(&config, args, cli.format),
        Command::Decode(args) => cmd_decode(&config, args, cli.format),
        Command::Resolve(args) => cmd_resolve(&config, args, cli.format),
        Command::Config(_) => cmd_config(&config, cli.format),
    }?;
    println!("{output}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReferenceConfig> {
    match path {
        Some(path) => ReferenceConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            debug!("no configuration file given, using defaults");
            Ok(ReferenceConfig::default())
        }
    }
}

fn resolver(config: &ReferenceConfig) -> StringReferenceResolver {
    StringReferenceResolver::new(Arc::new(config.clone()))
}

fn serializer(local: bool) -> StringReferenceSerializer {
    if local {
        StringReferenceSerializer::local()
    } else {
        StringReferenceSerializer::full()
    }
}

fn codec(config: &ReferenceConfig, local: bool) -> ObjectReferenceCodec {
    ObjectReferenceCodec::new(Arc::new(resolver(config)), Arc::new(serializer(local)))
}

fn to_json(value: &serde_json::Value) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn cmd_encode(config: &ReferenceConfig, args: EncodeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let class = resolver(config)
        .resolve(&args.class)
        .with_context(|| format!("invalid class reference {:?}", args.class))?;
    let name = codec(config, args.local).encode(&class, args.number);
    match format {
        OutputFormat::Text => Ok(name),
        OutputFormat::Json => to_json(&json!({
            "name": name,
            "class_reference": class,
            "object_number": args.number,
        })),
    }
}

fn cmd_decode(config: &ReferenceConfig, args: DecodeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let codec = codec(config, false);
    let (class, number) = codec
        .decode(&args.name)
        .with_context(|| format!("invalid object name {:?}", args.name))?;

    let reference = match &args.document {
        Some(document) => {
            let document = resolver(config)
                .resolve(document)
                .with_context(|| format!("invalid document reference {document:?}"))?;
            Some(codec.parse(&args.name, document)?)
        }
        None => None,
    };

    match format {
        OutputFormat::Json => to_json(&json!({
            "name": args.name,
            "class_reference": class,
            "object_number": number,
            "reference": reference,
        })),
        OutputFormat::Text => {
            let mut lines = vec![format!("Class:  {}", class.to_string().cyan())];
            match number {
                Some(n) => lines.push(format!("Number: {}", n.to_string().yellow())),
                None => lines.push(format!("Number: {}", "first object".dimmed())),
            }
            if let Some(reference) = reference {
                lines.push(format!("Object: {}", reference.to_string().bold()));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn cmd_resolve(config: &ReferenceConfig, args: ResolveArgs, format: OutputFormat) -> anyhow::Result<String> {
    let document = resolver(config)
        .resolve(&args.reference)
        .with_context(|| format!("invalid document reference {:?}", args.reference))?;
    match format {
        OutputFormat::Text => Ok(serializer(args.local).serialize(&document)),
        OutputFormat::Json => to_json(&json!(document)),
    }
}

fn cmd_config(config: &ReferenceConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(config.to_toml_string()?.trim_end().to_string()),
        OutputFormat::Json => to_json(&json!(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_output(output: anyhow::Result<String>) -> serde_json::Value {
        serde_json::from_str(&output.unwrap()).unwrap()
    }

    #[test]
    fn encode_full_and_local() {
        let config = ReferenceConfig::default();
        let args = EncodeArgs { class: "XWiki.Mail".into(), number: Some(0), local: false };
        assert_eq!(cmd_encode(&config, args, OutputFormat::Text).unwrap(), "xwiki:XWiki.Mail[0]");

        let args = EncodeArgs { class: "XWiki.Mail".into(), number: Some(0), local: true };
        assert_eq!(cmd_encode(&config, args, OutputFormat::Text).unwrap(), "XWiki.Mail[0]");
    }

    #[test]
    fn encode_escapes_literal_marker() {
        let config = ReferenceConfig::default();
        let args = EncodeArgs { class: r"XWiki.Foo\[3]".into(), number: None, local: true };
        assert_eq!(cmd_encode(&config, args, OutputFormat::Text).unwrap(), r"XWiki.Foo\[3]");
    }

    #[test]
    fn decode_json_without_document() {
        let config = ReferenceConfig::default();
        let args = DecodeArgs { name: "XWiki.Mail[2]".into(), document: None };
        let value = json_output(cmd_decode(&config, args, OutputFormat::Json));
        assert_eq!(value["object_number"], 2);
        assert_eq!(value["class_reference"]["wiki"], "xwiki");
        assert_eq!(value["class_reference"]["page"], "Mail");
        assert!(value["reference"].is_null());
    }

    #[test]
    fn decode_json_with_document() {
        let config = ReferenceConfig::default();
        let args = DecodeArgs {
            name: "XWiki.Mail".into(),
            document: Some("Sandbox.Test".into()),
        };
        let value = json_output(cmd_decode(&config, args, OutputFormat::Json));
        assert!(value["object_number"].is_null());
        assert_eq!(value["reference"]["document"]["space"], "Sandbox");
        assert_eq!(value["reference"]["name"], "XWiki.Mail");
    }

    #[test]
    fn decode_text_mentions_class() {
        let config = ReferenceConfig::default();
        let args = DecodeArgs { name: "XWiki.Mail[1]".into(), document: None };
        let text = cmd_decode(&config, args, OutputFormat::Text).unwrap();
        assert!(text.contains("xwiki:XWiki.Mail"));
        assert!(text.contains('1'));
    }

    #[test]
    fn decode_reports_overflow() {
        let config = ReferenceConfig::default();
        let args = DecodeArgs { name: "XWiki.Mail[99999999999]".into(), document: None };
        let err = cmd_decode(&config, args, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("invalid object name"));
    }

    #[test]
    fn resolve_uses_configured_defaults() {
        let config = ReferenceConfig {
            default_wiki: "dev".into(),
            ..ReferenceConfig::default()
        };
        let args = ResolveArgs { reference: "Mail".into(), local: false };
        assert_eq!(cmd_resolve(&config, args, OutputFormat::Text).unwrap(), "dev:Main.Mail");
    }

    #[test]
    fn config_round_trips_through_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_space = \"Docs\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        let value = json_output(cmd_config(&config, OutputFormat::Json));
        assert_eq!(value["default_space"], "Docs");
        assert_eq!(value["default_wiki"], "xwiki");
    }

    #[test]
    fn missing_config_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }
}
