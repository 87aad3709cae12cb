// ============ CKB AMM Integration Tests ============
// End-to-end flows across the codec and SDK crates.
//
// The SDK writes order cells the way a wallet would; the same bytes are
// then read back the way the indexer does, from nothing but the raw hex
// and a layout name. Any drift between the writer and reader side shows
// up here even when each crate's unit tests pass on their own.
//
// Test categories:
// 1. Swap order sold in SUDT, read back by layout name
// 2. Swap order sold in CKB on a legacy deployment
// 3. Liquidity order across all three layouts
// 4. Deployment JSON drives layout selection
// 5. Info cell published vectors and pool summary
// 6. Registry identity
// 7. Unsigned transaction JSON shape

use ckb_amm_codec::{
    Byte20, Byte32, CellDataCodec, CodecRegistry, InfoCellData, LiquidityOrderArgs,
    LiquidityOrderLayout, SwapOrderArgs, SwapOrderLayout, TipsArgs, CODECS,
};
use ckb_amm_sdk::{
    CellDep, CellInput, DepType, DexDeployment, DexSdk, HashType, LiquidityOrderRequest, OrderKind,
    PoolSummary, Script, ScriptRef, SdkError, SwapOrderRequest,
};

// ============ Constants ============

const ONE_CKB: u64 = 100_000_000; // shannons

// ============ Helper Functions ============

fn make_deployment(
    swap_layout: SwapOrderLayout,
    liquidity_layout: LiquidityOrderLayout,
) -> DexDeployment {
    DexDeployment {
        network: "devnet".into(),
        swap_order_lock: ScriptRef {
            code_hash: Byte32([0x51; 32]),
            hash_type: HashType::Type,
        },
        liquidity_order_lock: ScriptRef {
            code_hash: Byte32([0x52; 32]),
            hash_type: HashType::Data1,
        },
        sudt_type: ScriptRef {
            code_hash: Byte32([0x5e; 32]),
            hash_type: HashType::Type,
        },
        swap_layout,
        liquidity_layout,
        cell_deps: vec![CellDep {
            tx_hash: Byte32([0xde; 32]),
            index: 0,
            dep_type: DepType::DepGroup,
        }],
    }
}

fn user_lock() -> Script {
    Script::new(Byte32([0x9b; 32]), HashType::Type, format!("0x{}", "36".repeat(20)))
}

fn sudt_type(owner: u8) -> Script {
    Script::new(Byte32([0x5e; 32]), HashType::Type, format!("0x{}", hex::encode([owner; 32])))
}

fn swap_request(pay_sudt: bool) -> SwapOrderRequest {
    SwapOrderRequest {
        layout: None,
        user_lock: user_lock(),
        pay_sudt_type: pay_sudt.then(|| sudt_type(0x01)),
        receive_sudt_type_hash: Byte32([0x77; 32]),
        amount_in: "5000000000".into(),
        amount_out_min: "340282366920938463463374607431768211455".into(),
        tips: Some("1000".into()),
        tips_sudt: Some("7".into()),
        order_type: 1,
        version: 1,
        capacity: 300 * ONE_CKB,
    }
}

fn liquidity_request(layout: LiquidityOrderLayout) -> LiquidityOrderRequest {
    LiquidityOrderRequest {
        layout: Some(layout),
        user_lock: user_lock(),
        info_type_hash: Byte32([0xab; 32]),
        sudt_type: sudt_type(0x02),
        sudt_amount: "123456789".into(),
        amount0: "1000".into(),
        amount1: "2000".into(),
        // The legacy lock has no tips field
        tips: layout.has_tips().then(|| "3".into()),
        tips_sudt: None,
        tips_sudt_y: None,
        version: 2,
        capacity: 235 * ONE_CKB,
    }
}

// ============ Test 1: SUDT Swap Order Read Back By Name ============
// The indexer only knows the lock args hex and the layout name it was
// configured with; decoding must recover every field the SDK wrote.

#[test]
fn test_sudt_swap_order_roundtrip_through_indexer() {
    let sdk = DexSdk::new(make_deployment(SwapOrderLayout::CkbSudt, LiquidityOrderLayout::CkbSudt));
    let output = sdk.swap_order_output(&swap_request(true)).unwrap();

    assert_eq!(output.lock.code_hash, Byte32([0x51; 32]));
    assert_eq!(output.type_, Some(sudt_type(0x01)));

    let decoded = CODECS
        .swap_cell_serialization()
        .decode_args_by_name(&output.lock.args, "ckb-sudt")
        .unwrap();
    let args = match decoded {
        SwapOrderArgs::CkbSudt(args) => args,
        other => panic!("expected ckb-sudt args, got {:?}", other),
    };
    assert_eq!(args.sudt_type_hash, Byte32([0x77; 32]));
    assert_eq!(args.user_lock_hash, user_lock().calc_script_hash().unwrap());
    assert_eq!(args.amount_out_min, u128::MAX);
    assert_eq!(args.tips, TipsArgs { tips: 1000, tips_sudt: 7 });

    // The sold SUDT sits in the cell data
    let data = CODECS.swap_cell_serialization().decode_data(&output.data).unwrap();
    assert_eq!(data.sudt_amount, 5_000_000_000);

    let summary = sdk.summarize_order(&output).unwrap();
    assert_eq!(summary.kind, OrderKind::Swap);
    assert_eq!(summary.sudt_amount.as_deref(), Some("5000000000"));
    assert_eq!(summary.amounts["tips"], "1000");
}

// ============ Test 2: CKB Swap Order On A Legacy Deployment ============

#[test]
fn test_ckb_swap_order_legacy_layout() {
    let sdk = DexSdk::new(make_deployment(SwapOrderLayout::Legacy, LiquidityOrderLayout::Legacy));
    let mut req = swap_request(false);
    req.tips = None;
    req.tips_sudt = None;
    let output = sdk.swap_order_output(&req).unwrap();

    assert_eq!(output.type_, None);
    assert_eq!(output.data, "0x");
    // 66 bytes of args
    assert_eq!(output.lock.args.len(), 2 + 132);

    match CODECS
        .swap_cell_serialization()
        .decode_args(&output.lock.args, SwapOrderLayout::Legacy)
        .unwrap()
    {
        SwapOrderArgs::Legacy(args) => {
            assert_eq!(args.amount_in, 5_000_000_000);
            assert_eq!(args.min_amount_out, u128::MAX);
            assert_eq!(args.order_type, 1);
            assert_eq!(args.version, 1);
        }
        other => panic!("expected legacy args, got {:?}", other),
    }

    let summary = sdk.summarize_order(&output).unwrap();
    assert_eq!(summary.layout, "legacy");
    assert_eq!(summary.sudt_amount, None);
}

// ============ Test 3: Liquidity Order Across Layouts ============

#[test]
fn test_liquidity_order_all_layouts() {
    for layout in LiquidityOrderLayout::ALL {
        let sdk = DexSdk::new(make_deployment(SwapOrderLayout::CkbSudt, layout));
        let output = sdk.liquidity_order_output(&liquidity_request(layout)).unwrap();
        let codec = CODECS.liquidity_cell_serialization();

        let args = codec.decode_args(&output.lock.args, layout).unwrap();
        assert_eq!(args.layout(), layout);
        assert_eq!(args.version(), 2);
        assert_eq!(*args.user_lock_hash(), user_lock().calc_script_hash().unwrap());
        // Legacy keeps 20 bytes of the info type hash, the rest keep all 32;
        // the first 20 agree either way.
        assert_eq!(args.info_type_hash20(), Byte20([0xab; 20]));

        match args {
            LiquidityOrderArgs::Legacy(a) => {
                assert_eq!((a.amount0, a.amount1), (1000, 2000));
            }
            LiquidityOrderArgs::CkbSudt(a) => {
                assert_eq!((a.sudt_min, a.ckb_min), (1000, 2000));
                assert_eq!(a.tips, TipsArgs { tips: 3, tips_sudt: 0 });
            }
            LiquidityOrderArgs::SudtSudt(a) => {
                assert_eq!((a.sudt_x_min, a.sudt_y_min), (1000, 2000));
                assert_eq!(a.tips.tips_ckb, 3);
                assert_eq!(a.tips.tips_sudt_y, 0);
            }
        }

        assert_eq!(output.data, "0x15cd5b07000000000000000000000000");
        let summary = sdk.summarize_order(&output).unwrap();
        assert_eq!(summary.kind, OrderKind::Liquidity);
        assert_eq!(summary.sudt_amount.as_deref(), Some("123456789"));
    }
}

#[test]
fn test_liquidity_ckb_min_is_u64() {
    let sdk = DexSdk::new(make_deployment(SwapOrderLayout::CkbSudt, LiquidityOrderLayout::CkbSudt));
    let mut req = liquidity_request(LiquidityOrderLayout::CkbSudt);
    req.amount1 = "18446744073709551616".into();
    assert!(matches!(
        sdk.liquidity_order_output(&req),
        Err(SdkError::Codec(ckb_amm_codec::CodecError::OutOfRange { width_bits: 64, .. }))
    ));

    // The same value fits the 128-bit legacy amount1
    let legacy = make_deployment(SwapOrderLayout::CkbSudt, LiquidityOrderLayout::Legacy);
    let legacy = DexSdk::new(legacy);
    let mut legacy_req = liquidity_request(LiquidityOrderLayout::Legacy);
    legacy_req.amount1 = req.amount1.clone();
    assert!(legacy.liquidity_order_output(&legacy_req).is_ok());
}

// ============ Test 4: Deployment JSON Drives Layout Selection ============

#[test]
fn test_deployment_json_selects_layouts() {
    let json = format!(
        r#"{{
            "network": "mainnet",
            "swap_order_lock": {{ "code_hash": "0x{}", "hash_type": "type" }},
            "liquidity_order_lock": {{ "code_hash": "0x{}", "hash_type": "data1" }},
            "sudt_type": {{ "code_hash": "0x{}", "hash_type": "type" }},
            "swap_layout": "sudt-sudt",
            "liquidity_layout": "sudt-sudt"
        }}"#,
        "51".repeat(32),
        "52".repeat(32),
        "5e".repeat(32),
    );
    let sdk = DexSdk::new(DexDeployment::from_json(&json).unwrap());
    assert!(sdk.deployment.cell_deps.is_empty());

    let output = sdk.swap_order_output(&swap_request(true)).unwrap();
    // 105 bytes either way; only the field order tells the layouts apart
    assert_eq!(output.lock.args.len(), 2 + 210);
    let args = CODECS
        .swap_cell_serialization()
        .decode_args(&output.lock.args, SwapOrderLayout::SudtSudt)
        .unwrap();
    assert_eq!(args.layout(), SwapOrderLayout::SudtSudt);
    assert_eq!(args.amount_out_min(), u128::MAX);

    // Reading the same bytes with the other tips layout scrambles the fields
    let wrong = CODECS
        .swap_cell_serialization()
        .decode_args(&output.lock.args, SwapOrderLayout::CkbSudt)
        .unwrap();
    assert_ne!(wrong.user_lock_hash(), args.user_lock_hash());

    let mut liq = liquidity_request(LiquidityOrderLayout::SudtSudt);
    liq.layout = None;
    liq.tips_sudt_y = Some("9".into());
    let output = sdk.liquidity_order_output(&liq).unwrap();
    assert_eq!(output.lock.args.len(), 2 + 2 * 137);
    let summary = sdk.summarize_order(&output).unwrap();
    assert_eq!(summary.layout, "sudt-sudt");
    assert_eq!(summary.amounts["tips_sudt_y"], "9");
}

#[test]
fn test_foreign_lock_not_summarized() {
    let sdk = DexSdk::new(make_deployment(SwapOrderLayout::CkbSudt, LiquidityOrderLayout::CkbSudt));
    let mut output = sdk.swap_order_output(&swap_request(true)).unwrap();
    // Same code hash, different hash type: not our lock
    output.lock.hash_type = HashType::Data;
    assert_eq!(
        sdk.summarize_order(&output),
        Err(SdkError::ForeignLock(Byte32([0x51; 32])))
    );
}

// ============ Test 5: Info Cell Vectors And Pool Summary ============

#[test]
fn test_info_cell_args_vector() {
    let args = CODECS
        .info_cell_serialization()
        .encode_args(&format!("0x{}", "aa".repeat(32)), &format!("0x{}", "bb".repeat(32)))
        .unwrap();
    assert_eq!(args.len(), 82);
    assert_eq!(&args[..42], format!("0x{}", "aa".repeat(20)));
    assert_eq!(&args[42..], "bb".repeat(20));
}

#[test]
fn test_pool_summary_from_info_cell() {
    let codec = CODECS.info_cell_serialization();
    let args = codec
        .encode_args(&format!("0x{}", "aa".repeat(32)), &format!("0x{}", "bb".repeat(32)))
        .unwrap();
    let liquidity_type_hash = format!("0x{}", "cc".repeat(32));
    let data = codec
        .encode_reserves(500 * ONE_CKB as u128, 1_000_000, 22_360_679, &liquidity_type_hash)
        .unwrap();

    let decoded = codec.decode_data(&data).unwrap();
    assert_eq!(
        decoded,
        InfoCellData {
            ckb_reserve: 500 * ONE_CKB as u128,
            sudt_reserve: 1_000_000,
            total_liquidity: 22_360_679,
            liquidity_sudt_type_hash20: Byte20([0xcc; 20]),
        }
    );

    let summary = PoolSummary::from_info_cell(&args, &data).unwrap();
    assert_eq!(summary.total_liquidity, "22360679");
    assert_eq!(summary.info_type_hash, Byte20([0xbb; 20]));

    // Pool cell data is just the SUDT reserve
    let pool = CODECS.pool_cell_serialization();
    let pool_data = pool
        .encode_data(&ckb_amm_codec::SudtAmountData { sudt_amount: decoded.sudt_reserve })
        .unwrap();
    assert_eq!(pool.decode_data(&pool_data).unwrap().sudt_amount, 1_000_000);
}

// ============ Test 6: Registry Identity ============

#[test]
fn test_registry_is_idempotent() {
    assert_eq!(CODECS, CodecRegistry::new());
    assert_eq!(CODECS, CodecRegistry::default());
    assert_eq!(CODECS.swap_cell_serialization(), CODECS.swap_cell_serialization());

    // Two separately built registries produce identical bytes
    let a = CodecRegistry::new().sudt_cell_serialization().encode_amount(42).unwrap();
    let b = CODECS.sudt_cell_serialization().encode_amount(42).unwrap();
    assert_eq!(a, b);
}

// ============ Test 7: Unsigned Transaction JSON Shape ============

#[test]
fn test_order_transaction_json() {
    let sdk = DexSdk::new(make_deployment(SwapOrderLayout::CkbSudt, LiquidityOrderLayout::CkbSudt));
    let output = sdk.swap_order_output(&swap_request(false)).unwrap();
    let tx = sdk.order_transaction(
        vec![CellInput {
            tx_hash: Byte32([0x0f; 32]),
            index: 3,
            since: 0,
        }],
        vec![output],
    );

    let json = serde_json::to_value(&tx).unwrap();
    assert_eq!(json["cell_deps"][0]["dep_type"], "dep_group");
    assert_eq!(json["outputs"][0]["type"], serde_json::Value::Null);
    assert_eq!(json["outputs"][0]["lock"]["hash_type"], "type");
    assert_eq!(json["outputs"][0]["data"], "0x");
    assert_eq!(json["inputs"][0]["tx_hash"], format!("0x{}", "0f".repeat(32)));

    let back: ckb_amm_sdk::UnsignedTransaction = serde_json::from_value(json).unwrap();
    assert_eq!(back, tx);
}
