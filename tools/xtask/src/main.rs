//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与内容检查命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `i18n-check`: 检查两种语言的翻译表（键集合一致、没有空文案）
//! - `content-check`: 检查站点内容与 `site.json`

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use folio_core::config::SiteConfig;
use folio_core::i18n::{EN, ES, Translations};
use folio_core::{Locale, PROFILE};

/// 站点配置（相对于 workspace root）
const SITE_CONFIG_PATH: &str = "folio-web/site.json";
const ASSETS_DIR: &str = "folio-web/assets";

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;

            i18n_check()?;
            content_check(None)?;
        }
        "i18n-check" => {
            i18n_check()?;
        }
        "content-check" => {
            let path = args.next().map(PathBuf::from);
            content_check(path.as_deref())?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查，再运行下面两项检查
  i18n-check      检查翻译表
  content-check   检查站点内容与配置

CONTENT-CHECK:
  cargo xtask content-check [path]

  不带参数：检查 folio-web/site.json
  带路径参数：检查指定的配置文件

  检查内容：
    - 链接使用 https、技能等级不超过 100
    - 至少一个精选项目、项目标题不重复
    - 时间段的起止顺序
    - 引用的图片存在于 folio-web/assets
    - 配置文件可以解析并通过验证

ALIASES (in .cargo/config.toml):
  cargo check-all     -> cargo xtask check-all
  cargo i18n-check    -> cargo xtask i18n-check
  cargo content-check -> cargo xtask content-check
"#
    );
}

//=============================================================================
// i18n-check 命令实现
//=============================================================================

/// 两张表的差异
#[derive(Debug, Default, PartialEq)]
struct KeyDiff {
    /// 只在西班牙语表中出现
    only_es: Vec<String>,
    /// 只在英语表中出现
    only_en: Vec<String>,
}

impl KeyDiff {
    fn is_empty(&self) -> bool {
        self.only_es.is_empty() && self.only_en.is_empty()
    }
}

/// 比较两张表的键集合（输入均已排序）
fn diff_keys(es: &[String], en: &[String]) -> KeyDiff {
    KeyDiff {
        only_es: es.iter().filter(|k| !en.contains(k)).cloned().collect(),
        only_en: en.iter().filter(|k| !es.contains(k)).cloned().collect(),
    }
}

fn i18n_check() -> anyhow::Result<()> {
    eprintln!("\n==> i18n-check");

    let tables: [(Locale, &Translations); 2] = [(Locale::Es, &ES), (Locale::En, &EN)];
    let mut errors = 0usize;

    let diff = diff_keys(&ES.keys(), &EN.keys());
    if !diff.is_empty() {
        for key in &diff.only_es {
            eprintln!("[ERROR] key only in es: {key}");
        }
        for key in &diff.only_en {
            eprintln!("[ERROR] key only in en: {key}");
        }
        errors += diff.only_es.len() + diff.only_en.len();
    }

    for (locale, table) in tables {
        for key in table.empty_keys() {
            eprintln!("[ERROR] {locale}: empty text for {key}");
            errors += 1;
        }
    }

    if errors > 0 {
        anyhow::bail!("翻译表检查发现 {errors} 个错误");
    }
    eprintln!("✅ {} 个键，两种语言一致", ES.keys().len());
    Ok(())
}

//=============================================================================
// content-check 命令实现
//=============================================================================

fn content_check(path: Option<&Path>) -> anyhow::Result<()> {
    eprintln!("\n==> content-check");

    let problems = PROFILE.validate();
    for problem in &problems {
        eprintln!("[ERROR] content: {problem}");
    }

    let path = path.unwrap_or(Path::new(SITE_CONFIG_PATH));
    let config_error = match std::fs::read_to_string(path) {
        Ok(json) => SiteConfig::parse(&json).err().map(|e| e.to_string()),
        Err(e) => Some(format!("无法读取 {}: {e}", path.display())),
    };
    if let Some(error) = &config_error {
        eprintln!("[ERROR] {}: {error}", path.display());
    }

    let assets = Path::new(ASSETS_DIR);
    let missing: Vec<&str> = PROFILE
        .image_paths()
        .into_iter()
        .filter(|src| !assets.join(src.trim_start_matches('/')).is_file())
        .collect();
    for src in &missing {
        eprintln!("[ERROR] content: 图片 {src} 不在 {ASSETS_DIR} 中");
    }

    let errors = problems.len() + missing.len() + usize::from(config_error.is_some());
    if errors > 0 {
        anyhow::bail!("内容检查发现 {errors} 个错误");
    }

    eprintln!(
        "✅ {} 个项目、{} 段经历，{} 通过验证",
        PROFILE.projects.len(),
        PROFILE.experience.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_keys_reports_both_sides() {
        let es = vec!["a".to_string(), "b".to_string()];
        let en = vec!["b".to_string(), "c".to_string()];
        let diff = diff_keys(&es, &en);
        assert_eq!(diff.only_es, vec!["a".to_string()]);
        assert_eq!(diff.only_en, vec!["c".to_string()]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_bundled_tables_match() {
        assert!(diff_keys(&ES.keys(), &EN.keys()).is_empty());
    }
}
