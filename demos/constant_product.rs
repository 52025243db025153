//! Walks a pool through its lifecycle with the in-memory collaborators.
//!
//! ```text
//! RUST_LOG=hydra_cpmm=debug cargo run --example constant_product
//! ```

use hydra_cpmm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hydra_cpmm=debug")),
        )
        .with_target(false)
        .init();

    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let minter = AccountId::from_bytes([0xee; 32]);
    let pool_account = AccountId::from_bytes([0xb0; 32]);
    let deployer = AccountId::from_bytes([0x10; 32]);
    let trader = AccountId::from_bytes([0x30; 32]);

    let mut a = InMemoryAssetLedger::new(usdc, minter);
    let mut b = InMemoryAssetLedger::new(weth, minter);
    for ledger in [&mut a, &mut b] {
        for holder in [deployer, trader] {
            ledger.mint(&minter, &holder, Amount::new(1_000_000_000))?;
            ledger.approve(&holder, &pool_account, Amount::MAX);
        }
    }

    let config = PoolConfig::new(
        AssetPair::new(usdc, weth)?,
        pool_account,
        InitialSharePolicy::GeometricMean,
    )?;
    let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
    let mut pool = PoolEngine::new(config, a, b, InMemoryShareLedger::new(), clock)?;

    println!("=== Constant-product pool ===\n");

    let seeded = pool.bootstrap(&deployer, Amount::new(2_000_000), Amount::new(1_000))?;
    println!("seeded with {} shares", seeded.shares_issued());
    println!("weth price: {} usdc", pool.get_price(&weth, &usdc)?);

    let deadline = pool.clock().now().plus_secs(60);
    let path = SwapPath::new(usdc, weth)?;
    let preview = pool.quote_swap(Amount::new(100_000), &path)?;
    let receipt = pool.swap(
        &trader,
        SwapRequest {
            amount_in: Amount::new(100_000),
            amount_out_min: preview,
            path,
            recipient: trader,
            deadline,
        },
    )?;
    println!(
        "swapped {} usdc for {} weth",
        receipt.amount_in(),
        receipt.amount_out()
    );
    println!("weth price: {} usdc", pool.get_price(&weth, &usdc)?);

    pool.clock_mut().advance(120);
    let late = pool.swap(
        &trader,
        SwapRequest {
            amount_in: Amount::new(1),
            amount_out_min: Amount::ZERO,
            path: path.reversed(),
            recipient: trader,
            deadline,
        },
    );
    println!("late swap: {late:?}");

    let shares = pool.share_account(&deployer).balance();
    let out = pool.withdraw(
        &deployer,
        WithdrawRequest {
            asset_a: usdc,
            asset_b: weth,
            shares,
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: deployer,
            deadline: pool.clock().now().plus_secs(60),
        },
    )?;
    println!(
        "deployer redeemed {} shares for {} usdc and {} weth",
        shares,
        out.amount_a(),
        out.amount_b()
    );
    println!("pool initialized: {}", pool.is_initialized());
    Ok(())
}
