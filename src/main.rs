use anyhow::Result;
use clap::{Parser, Subcommand};

use trendfeed::model::{ContentArticlesPacket, ContentTweetsPacket};
use trendfeed::{Article, Tweet, TrendsClient};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Origin and version prefix of the trends API
    #[arg(long, default_value = "http://localhost:8080/v1")]
    base_url: String,

    /// Answer every request from embedded sample data instead of the network
    #[arg(long)]
    fixture: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every currently-tracked trend
    Trends,
    /// Show one trend with its latest tweets and articles
    Trend {
        /// Trend name, unencoded (quote hashtags: trendfeed trend '#WorldCup')
        name: String,
        /// Only show content older than this id
        #[arg(long)]
        max_id: Option<String>,
    },
    /// One page of tweets across all trends
    Tweets {
        /// Only show tweets older than this id
        #[arg(long)]
        max_id: Option<String>,
    },
    /// One page of articles across all trends
    Articles {
        /// Only show articles older than this id
        #[arg(long)]
        max_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let client = if args.fixture {
        TrendsClient::fixture(&args.base_url)
    } else {
        TrendsClient::new(&args.base_url)
    };

    match args.command {
        Command::Trends => {
            let all = client.all_trends().await?;
            for trend in &all.trends {
                println!("{:>6}  {:<24}  {:+.2}", trend.id, trend.name, trend.sentiment);
            }
        }
        Command::Trend { name, max_id } => {
            let cursor = max_id.as_deref();
            let (trend, tweets, articles) = futures::try_join!(
                client.trend(&name),
                client.trend_tweets(&name, cursor),
                client.trend_articles(&name, cursor),
            )?;

            println!(
                "{}  (id {}, sentiment {:+.2})",
                trend.name, trend.id, trend.sentiment
            );
            println!();
            println!("tweets:");
            print_tweets(tweets);
            println!();
            println!("articles:");
            print_articles(articles);
        }
        Command::Tweets { max_id } => {
            let page = client.all_trends_tweets(max_id.as_deref()).await?;
            print_tweets(page);
        }
        Command::Articles { max_id } => {
            let page = client.all_trends_articles(max_id.as_deref()).await?;
            print_articles(page);
        }
    }

    Ok(())
}

/// Prints one page of tweets, wrapping each raw item on the way out, then a
/// ready-to-paste cursor hint for the next page.
fn print_tweets(page: ContentTweetsPacket) {
    let next = page.next_max_id().map(str::to_string);
    for packet in page.tweets {
        let tweet = Tweet::from(packet);
        println!(
            "  [{}] @{}  {}",
            tweet.posted_at.format("%Y-%m-%d %H:%M"),
            tweet.user,
            tweet.text
        );
    }
    if let Some(cursor) = next {
        println!("  older: --max-id {cursor}");
    }
}

fn print_articles(page: ContentArticlesPacket) {
    let next = page.next_max_id().map(str::to_string);
    for packet in page.articles {
        let article = Article::from(packet);
        println!(
            "  [{}] {}  <{}>  ({})",
            article.published_at.format("%Y-%m-%d %H:%M"),
            article.title,
            article.url,
            article.source
        );
    }
    if let Some(cursor) = next {
        println!("  older: --max-id {cursor}");
    }
}
