use ipwho_rs::{IpWho, Lookup};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let ipwho = IpWho::init(None);

    match ipwho.lookup_self().await {
        Ok(Lookup::Found(me)) => println!("you are {} in {}, {}", me.ip, me.city, me.country),
        Ok(Lookup::Rejected { message }) => println!("lookup rejected: {message:?}"),
        Err(e) => println!("lookup failed: {e}"),
    }

    for address in std::env::args().skip(1) {
        match ipwho.lookup(&address).await {
            Ok(Lookup::Found(result)) => println!(
                "{} -> {} ({}) via {}",
                result.ip, result.country, result.timezone.id, result.connection.isp
            ),
            Ok(Lookup::Rejected { message }) => println!("{address}: rejected {message:?}"),
            Err(e) => println!("{address}: {e}"),
        }
    }
}
