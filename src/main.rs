// ==========================================
// BarOmatic - 命令行入口
// ==========================================
// 用法:
//   baromatic <request.json> [--config <path>] [--json | --csv]
//
// 默认输出纯文本摘要；--json 输出完整报告；--csv 输出备货清单
// 配置: --config 指定文件，否则使用默认路径（存在时），再叠加 BAROMATIC_* 环境变量
// ==========================================

use anyhow::{bail, Context, Result};
use baromatic::api::{render_text_summary, report_to_json, supply_csv_string};
use baromatic::config::get_default_config_path;
use baromatic::{logging, ConfigManager, PlanApi, APP_NAME, VERSION};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug)]
struct CliArgs {
    request_path: PathBuf,
    config_path: Option<PathBuf>,
    format: OutputFormat,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut request_path = None;
    let mut config_path = None;
    let mut format = OutputFormat::Text;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config 需要一个文件路径")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => format = OutputFormat::Json,
            "--csv" => format = OutputFormat::Csv,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => {
                if request_path.replace(PathBuf::from(other)).is_some() {
                    bail!("只能指定一个请求文件");
                }
            }
        }
    }

    let request_path = match request_path {
        Some(path) => path,
        None => {
            print_usage();
            bail!("缺少请求文件");
        }
    };

    Ok(CliArgs {
        request_path,
        config_path,
        format,
    })
}

fn print_usage() {
    eprintln!("{} {}", APP_NAME, VERSION);
    eprintln!("usage: baromatic <request.json> [--config <path>] [--json | --csv]");
}

fn load_config(explicit: Option<&PathBuf>) -> Result<ConfigManager> {
    let manager = match explicit {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
        None => {
            let default_path = get_default_config_path();
            if default_path.exists() {
                tracing::debug!(path = %default_path.display(), "使用默认配置文件");
                ConfigManager::from_file(&default_path)
                    .with_context(|| format!("无法加载配置文件 {}", default_path.display()))?
            } else {
                ConfigManager::new()
            }
        }
    };
    Ok(manager.with_env_overrides())
}

fn main() -> Result<()> {
    logging::init_with_default("warn");

    let cli = parse_args()?;
    let config = load_config(cli.config_path.as_ref())?;
    let api = PlanApi::new(&config).context("配置校验失败")?;

    let raw = std::fs::read_to_string(&cli.request_path)
        .with_context(|| format!("无法读取请求文件 {}", cli.request_path.display()))?;
    let report = api
        .plan_event_json(&raw)
        .with_context(|| format!("活动规划失败: {}", cli.request_path.display()))?;

    let output = match cli.format {
        OutputFormat::Text => render_text_summary(&report),
        OutputFormat::Json => report_to_json(&report)?,
        OutputFormat::Csv => supply_csv_string(&report.plan)?,
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(output.as_bytes())
        .context("写出结果失败")?;
    if !output.ends_with('\n') {
        writeln!(handle).context("写出结果失败")?;
    }
    Ok(())
}
