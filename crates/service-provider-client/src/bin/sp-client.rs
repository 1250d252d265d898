use clap::{Parser, Subcommand};
use serde::Serialize;
use sp_client::{Address, ClientConfig, Community, SubscriptionTx, TransferFrom};

#[derive(Debug, Parser)]
#[command(name = "sp-client", about = "Query a zkSync subscription Service Provider")]
struct Cli {
    /// Service Provider address. Overrides SERVICE_PROVIDER_URL.
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Address of the genesis (minting source) wallet.
    GenesisWallet,
    IsSubscribed {
        #[arg(long)]
        user: String,
        #[arg(long, env = "COMMUNITY_NAME")]
        community: String,
    },
    GrantedTokens {
        #[arg(long)]
        user: String,
        #[arg(long, env = "COMMUNITY_NAME")]
        community: String,
    },
    /// Request a signature for a prepared transfer-from (JSON).
    MintingSignature {
        #[arg(long)]
        user: String,
        #[arg(long, env = "COMMUNITY_NAME")]
        community: String,
        #[arg(long)]
        minting_tx: String,
    },
    /// Report a subscription batch (JSON array of subscription txs).
    Subscribe {
        #[arg(long)]
        user: String,
        #[arg(long, env = "COMMUNITY_NAME")]
        community: String,
        #[arg(long)]
        subscription_wallet: String,
        #[arg(long)]
        txs: String,
    },
    RelatedCommunities {
        #[arg(long)]
        user: String,
    },
    DeclareCommunity {
        #[arg(long)]
        name: String,
        #[arg(long)]
        token_name: String,
        #[arg(long)]
        token_address: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> sp_client::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.url {
        config.service_provider_url = url;
    }
    let provider = config.provider()?;
    let provider = &provider;
    let retry = config.retry;

    tracing::info!(
        url = %provider.transport().address(),
        routing = ?provider.transport().routing(),
        "using service provider"
    );

    match cli.command {
        Command::GenesisWallet => {
            let address = retry.run(move || provider.genesis_wallet_address()).await?;
            print_json(&address)
        }
        Command::IsSubscribed { user, community } => {
            let user = Address::from(user);
            let (user, community) = (&user, community.as_str());
            let status = retry
                .run(move || provider.is_user_subscribed(user, community))
                .await?;
            print_json(&status)
        }
        Command::GrantedTokens { user, community } => {
            let user = Address::from(user);
            let (user, community) = (&user, community.as_str());
            let granted = retry
                .run(move || provider.granted_tokens(user, community))
                .await?;
            print_json(&granted)
        }
        Command::MintingSignature {
            user,
            community,
            minting_tx,
        } => {
            let user = Address::from(user);
            let minting_tx = TransferFrom(serde_json::from_str(&minting_tx)?);
            let (user, community, minting_tx) = (&user, community.as_str(), &minting_tx);
            let signature = retry
                .run(move || provider.get_minting_signature(user, community, minting_tx))
                .await?;
            print_json(&signature)
        }
        Command::Subscribe {
            user,
            community,
            subscription_wallet,
            txs,
        } => {
            let user = Address::from(user);
            let wallet = Address::from(subscription_wallet);
            let txs: Vec<SubscriptionTx> = serde_json::from_str(&txs)?;
            let (user, community, wallet, txs) = (&user, community.as_str(), &wallet, &txs[..]);
            retry
                .run(move || provider.subscribe(user, community, wallet, txs))
                .await?;
            println!("Subscription batch of {} tx(s) reported", txs.len());
            Ok(())
        }
        Command::RelatedCommunities { user } => {
            let user = Address::from(user);
            let user = &user;
            let communities = retry
                .run(move || provider.related_communities(user))
                .await?;
            print_json(&communities)
        }
        Command::DeclareCommunity {
            name,
            token_name,
            token_address,
        } => {
            let community = Community {
                name,
                erc20_token_name: token_name,
                erc20_token_address: Address::from(token_address),
            };
            let community = &community;
            retry
                .run(move || provider.declare_community(community))
                .await?;
            println!("Community '{}' declared", community.name);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> sp_client::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
