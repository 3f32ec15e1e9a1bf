use std::path::{Path, PathBuf};

use aggregates_client::{
    models::{request::parse_iso_date, timespan::Timespan},
    sources::{AggregatesSource, json_file::JsonFileSource},
};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use marble::{
    chart::build_chart_with,
    config::{MarbleConfig, load_config_path},
    dummy::dummy_trades,
    panel::{ChartView, FetchStatus, PanelState},
    trade::Trade,
    zones::derive_zones,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Candlestick chart descriptions from OHLCV aggregates")]
struct Cli {
    /// TOML config; built-in defaults when omitted.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fetch bars and print the chart description as JSON.
    Chart(ChartArgs),
    /// Print the tooltip for one bar.
    Tooltip(TooltipArgs),
    /// Pair trades into profit/loss zones.
    Zones {
        #[arg(long, value_name = "FILE")]
        trades: PathBuf,
    },
}

#[derive(Args)]
struct ChartArgs {
    #[arg(long, default_value = "AAPL")]
    ticker: String,
    /// YYYY-MM-DD; one month before --to when omitted.
    #[arg(long)]
    from: Option<String>,
    /// YYYY-MM-DD; today (UTC) when omitted.
    #[arg(long)]
    to: Option<String>,
    #[arg(long, default_value_t = Timespan::Day)]
    timespan: Timespan,
    /// Read bars from a JSON file instead of the REST service.
    #[arg(long, value_name = "FILE")]
    bars: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    trades: Option<PathBuf>,
    #[arg(long)]
    no_dummy_trades: bool,
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct TooltipArgs {
    #[arg(long, value_name = "FILE")]
    bars: PathBuf,
    #[arg(long)]
    index: usize,
    #[arg(long, value_name = "FILE")]
    trades: Option<PathBuf>,
    #[arg(long, default_value = "AAPL")]
    ticker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => load_config_path(path)?,
        None => MarbleConfig::default(),
    };

    match cli.cmd {
        Cmd::Chart(args) => chart(&cfg, args).await,
        Cmd::Tooltip(args) => tooltip(&cfg, args).await,
        Cmd::Zones { trades } => {
            let trades = read_trades(&trades)?;
            println!("{}", serde_json::to_string_pretty(&derive_zones(&trades))?);
            Ok(())
        }
    }
}

async fn chart(cfg: &MarbleConfig, args: ChartArgs) -> Result<()> {
    let mut panel = PanelState::new(chrono::Utc::now().date_naive());
    panel.set_ticker(&args.ticker);
    panel.set_timespan(args.timespan);
    if let Some(to) = &args.to {
        let to = parse_iso_date(to)?;
        let from = match &args.from {
            Some(from) => parse_iso_date(from)?,
            None => to.checked_sub_months(chrono::Months::new(1)).unwrap_or(to),
        };
        panel.set_range(from, to);
    } else if let Some(from) = &args.from {
        let to = panel.request.to_date;
        panel.set_range(parse_iso_date(from)?, to);
    }

    let source: Box<dyn AggregatesSource> = match &args.bars {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(
            cfg.service
                .rest_source()
                .context("cannot build REST source")?,
        ),
    };

    panel.submit(source.as_ref()).await;
    if let FetchStatus::Failed { message } = &panel.status {
        bail!("{message}");
    }
    if let Some(msg) = panel.status_message() {
        eprintln!("{msg}");
    }

    let trades = args.trades.as_deref().map(read_trades).transpose()?;
    let use_dummy = cfg.chart.use_dummy_trades && !args.no_dummy_trades;

    match panel.chart_view(trades.as_deref(), use_dummy, &cfg.palette) {
        ChartView::NoData => eprintln!("{}", ChartView::NO_DATA_MESSAGE),
        ChartView::Chart(chart) => {
            let json = serde_json::to_string_pretty(&chart)?;
            match &args.out {
                Some(path) => std::fs::write(path, json)
                    .with_context(|| format!("cannot write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
    }
    Ok(())
}

async fn tooltip(cfg: &MarbleConfig, args: TooltipArgs) -> Result<()> {
    let bars = JsonFileSource::new(&args.bars).read_all().await?;
    let trades = match &args.trades {
        Some(path) => read_trades(path)?,
        None if cfg.chart.use_dummy_trades => dummy_trades(&bars),
        None => Vec::new(),
    };

    let Some(chart) = build_chart_with(&bars, &trades, &args.ticker, &cfg.palette) else {
        eprintln!("{}", ChartView::NO_DATA_MESSAGE);
        return Ok(());
    };
    let Some(tip) = chart.tooltip(args.index) else {
        bail!("index {} out of range (0..{})", args.index, chart.category_axis.len());
    };
    println!("{tip}");
    Ok(())
}

fn read_trades(path: &Path) -> Result<Vec<Trade>> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read trades {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("malformed trades {}", path.display()))
}
