//! typing-cost - 키 시퀀스의 타이핑 보정 비용 조회

use std::process::ExitCode;

use typing_cost::config::{config_path, load_config, save_config};
use typing_cost::model::{has_typing_model, typing_model, SpecialRomanjiTable};
use typing_cost::query::{query_costs, CostReport};

const USAGE: &str = "사용법: typing-cost [--scheme <이름>] [--json] <키>...\n       typing-cost --scheme <이름> --save\n       typing-cost --list";

/// 명령행 인자
struct Args {
    scheme: Option<SpecialRomanjiTable>,
    json: bool,
    list: bool,
    /// 지정한 입력 방식을 설정 파일에 저장
    save: bool,
    keys: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        scheme: None,
        json: false,
        list: false,
        save: false,
        keys: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scheme" | "-s" => {
                let name = args
                    .next()
                    .ok_or_else(|| "--scheme 뒤에 입력 방식 이름이 필요합니다".to_string())?;
                parsed.scheme = Some(name.parse()?);
            }
            "--json" => parsed.json = true,
            "--list" => parsed.list = true,
            "--save" => parsed.save = true,
            "--" => parsed.keys.extend(args.by_ref()),
            _ if arg.starts_with("--") => return Err(format!("알 수 없는 옵션: {}", arg)),
            _ => parsed.keys.push(arg),
        }
    }

    if parsed.save && parsed.scheme.is_none() {
        return Err("--save에는 --scheme이 필요합니다".to_string());
    }

    Ok(parsed)
}

fn print_reports(reports: &[CostReport], json: bool) {
    if json {
        match serde_json::to_string_pretty(reports) {
            Ok(out) => println!("{}", out),
            Err(e) => log::error!("JSON 직렬화 실패: {}", e),
        }
        return;
    }

    for report in reports {
        match (&report.cost, &report.error) {
            (_, Some(error)) => println!("{}\t에러: {}", report.key, error),
            (Some(cost), None) => println!("{}\t{}", report.key, cost),
            (None, None) => println!("{}\tinf", report.key),
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if args.list {
        for table in SpecialRomanjiTable::ALL {
            let mark = if has_typing_model(table) { "*" } else { " " };
            println!("{} {}", mark, table);
        }
        return ExitCode::SUCCESS;
    }

    if let (true, Some(scheme)) = (args.save, args.scheme) {
        let mut config = load_config();
        config.special_romanji_table = scheme;
        if let Err(e) = save_config(&config) {
            log::error!("설정 저장 실패: {}", e);
            return ExitCode::FAILURE;
        }
        println!("{} 저장됨: {}", scheme, config_path().display());
        return ExitCode::SUCCESS;
    }

    if args.keys.is_empty() {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    let config = load_config();
    let scheme = args.scheme.unwrap_or(config.special_romanji_table);

    if !config.use_typing_correction {
        println!("오타 보정이 꺼져 있습니다. 원본 입력을 사용합니다.");
        return ExitCode::SUCCESS;
    }

    let Some(model) = typing_model(scheme) else {
        println!("{}: 타이핑 모델 없음. 원본 입력을 사용합니다.", scheme);
        return ExitCode::SUCCESS;
    };

    let reports = query_costs(model, &args.keys[..]);
    print_reports(&reports, args.json);

    if reports.iter().any(|r| r.error.is_some()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
