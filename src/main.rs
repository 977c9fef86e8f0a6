//! # 正方形图标导出工具 — 命令行入口
//!
//! 本文件只负责参数解析、日志初始化与结果输出，扮演界面层的角色。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use square_icons::commands;
use square_icons::error::AppError;
use square_icons::icon_export::{ExportReport, ExportServiceState, ResizeFilter, VariantStatus};
use square_icons::picker::{FallbackPicker, PathPicker, PresetPicker, PromptPicker};
use square_icons::session::{ExportSession, StatusMessage};
use square_icons::settings::{self, ExportSettings};
use square_icons::storage::{self, DestinationInfo};

#[derive(Debug, Parser)]
#[command(name = "icon-export")]
#[command(about = "Validate a square image (<= 500px) and export @1x/@2x PNG icons")]
struct Cli {
    /// Source image; prompted on stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Destination folder; prompted on stdin when omitted
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Output base name (files are <base-name>@1x.png, <base-name>@2x.png)
    #[arg(long)]
    base_name: Option<String>,

    /// Resize filter: nearest, bilinear, catmull-rom, lanczos3
    #[arg(long)]
    filter: Option<ResizeFilter>,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to this JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Never prompt; missing paths count as cancelled
    #[arg(long)]
    no_prompt: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CliOutput {
    status: StatusMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ExportReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<DestinationInfo>,
}

impl CliOutput {
    fn status_only(status: StatusMessage) -> Self {
        Self {
            status,
            report: None,
            destination: None,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let output = match run(&cli).await {
        Ok(output) => output,
        Err(err) => {
            log::error!("运行失败: {err}");
            CliOutput::status_only(StatusMessage::error(err.to_string()))
        }
    };

    print_output(&output, cli.json);

    if output.status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run(cli: &Cli) -> Result<CliOutput, AppError> {
    let mut config = settings::load_export_config(cli.config.as_deref())?;
    if let Some(base_name) = &cli.base_name {
        config.base_name = base_name.clone();
    }
    if let Some(filter) = cli.filter {
        config.resize_filter = filter;
    }

    let service = ExportServiceState::new(config)?;

    if let Some(path) = &cli.save_config {
        let effective = service.exporter().config_snapshot()?;
        settings::save_settings(path, &ExportSettings::from(&effective))?;
        log::info!("💾 已保存设置到 {}", path.display());
    }

    let mut picker = build_picker(cli);
    let mut session = ExportSession::new();
    let status = commands::run_export_flow(&service, picker.as_mut(), &mut session).await?;

    let destination = session
        .last_report()
        .and(session.destination())
        .and_then(|dir| storage::destination_info(dir).ok());

    Ok(CliOutput {
        status,
        report: session.last_report().cloned(),
        destination,
    })
}

fn build_picker(cli: &Cli) -> Box<dyn PathPicker> {
    let preset = PresetPicker::new(cli.file.clone(), cli.dest.clone());
    if cli.no_prompt {
        return Box::new(preset);
    }

    let prompt = PromptPicker::new(std::io::stdin().lock(), std::io::stdout());
    Box::new(FallbackPicker::new(preset, prompt))
}

fn print_output(output: &CliOutput, json: bool) {
    if json {
        match serde_json::to_string_pretty(output) {
            Ok(text) => println!("{text}"),
            Err(err) => eprintln!("序列化结果失败: {err}"),
        }
        return;
    }

    if let Some(report) = &output.report {
        for outcome in &report.outcomes {
            match &outcome.status {
                VariantStatus::Written => println!("  ✓ {}", outcome.path.display()),
                VariantStatus::Skipped(reason) => {
                    println!("  - {} 已跳过：{}", outcome.path.display(), reason)
                }
                VariantStatus::Failed(reason) => {
                    println!("  ✗ {} 失败：{}", outcome.path.display(), reason)
                }
            }
        }
    }

    if output.status.is_success() {
        println!("{}", output.status.text);
    } else {
        eprintln!("{}", output.status.text);
    }

    if let Some(info) = &output.destination {
        println!(
            "输出目录 {}：{} 个 PNG，共 {:.1} KB",
            info.path,
            info.png_count,
            info.total_size as f64 / 1024.0
        );
    }
}
