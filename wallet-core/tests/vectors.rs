// wallet-core/tests/vectors.rs
//
// Published vectors for the "abandon ... about" BIP-39 mnemonic.

use owg_core::chains::monero::MoneroKeys;
use owg_core::crypto::key_deriver::Ed25519Deriver;
use owg_core::crypto::paths::{coin_type, purpose};
use owg_core::{
    generator_for, AddressPath, Coin, GeneratorConfig, PathFamily, Position, WalletAddress,
    WalletError,
};

const MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

const SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

fn seed() -> Vec<u8> {
    bip39::Mnemonic::parse(MNEMONIC).unwrap().to_seed("").to_vec()
}

fn with_keys() -> GeneratorConfig {
    GeneratorConfig {
        include_private_key: true,
        include_public_key: true,
        ..GeneratorConfig::default()
    }
}

#[test]
fn mnemonic_seed_matches_bip39_vector() {
    assert_eq!(hex::encode(seed()), SEED);
}

#[test]
fn bip84_receive_addresses() {
    let generator = generator_for(Coin::Bitcoin, &seed(), &with_keys()).unwrap();
    let wallet = generator
        .generate_wallet(
            Position::AccountChangeIndex {
                account: 0,
                change: 0,
                index: 0,
            },
            2,
        )
        .unwrap();

    let first = &wallet.addresses()[0];
    assert_eq!(first.path().to_string(), "m/84'/0'/0'/0/0");
    assert_eq!(
        first.address().to_string(),
        "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"
    );
    assert_eq!(
        first.private_key(),
        Some("KyZpNDKnfs94vbrwhJneDi77V6jF64PWPF8x5cdJb8ifgg2DUc9d")
    );
    assert_eq!(
        first.public_key(),
        Some("0330D54FD0DD420A6E5F8D3624F5F3482CAE350F79D5F0753BF5BEEF9C2D91AF3C")
    );

    let second = &wallet.addresses()[1];
    assert_eq!(second.path().to_string(), "m/84'/0'/0'/0/1");
    assert_eq!(
        second.address().to_string(),
        "bc1qnjg0jd8228aq7egyzacy8cys3knf9xvrerkf9g"
    );
}

#[test]
fn bip84_account_zpub() {
    let generator = generator_for(Coin::Bitcoin, &seed(), &GeneratorConfig::default()).unwrap();
    let wallet = generator.generate_default_wallet().unwrap();

    let xpub = wallet.extended_public_key().unwrap();
    assert_eq!(xpub.path.to_string(), "m/84'/0'/0'");
    assert_eq!(
        xpub.key,
        "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs"
    );
}

#[test]
fn bip84_first_change_address() {
    let generator = generator_for(Coin::Bitcoin, &seed(), &GeneratorConfig::default()).unwrap();
    let wallet = generator
        .generate_wallet(
            Position::AccountChangeIndex {
                account: 0,
                change: 1,
                index: 0,
            },
            1,
        )
        .unwrap();
    assert_eq!(
        wallet.addresses()[0].address().to_string(),
        "bc1q8c6fshw2dlwun7ekn9qwf37cu2rn755upcp6el"
    );
}

#[test]
fn ethereum_first_address() {
    let generator = generator_for(Coin::Ethereum, &seed(), &GeneratorConfig::default()).unwrap();
    let wallet = generator.generate_default_wallet().unwrap();
    assert_eq!(
        wallet.addresses()[0].address().to_string(),
        "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
    );
}

fn first_address(coin: Coin) -> WalletAddress {
    let generator = generator_for(coin, &seed(), &with_keys()).unwrap();
    let wallet = generator.generate_default_wallet().unwrap();
    wallet.addresses()[0].clone()
}

#[test]
fn default_address_for_every_coin() {
    let expected = [
        (Coin::Bitcoin, "m/84'/0'/0'/0/0", "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"),
        (Coin::Litecoin, "m/84'/2'/0'/0/0", "ltc1qjmxnz78nmc8nq77wuxh25n2es7rzm5c2rkk4wh"),
        (Coin::Dogecoin, "m/44'/3'/0'/0/0", "DBus3bamQjgJULBJtYXpEzDWQRwF5iwxgC"),
        (Coin::Ripple, "m/44'/144'/0'/0/0", "rHsMGQEkVNJmpGWs8XUBoTBiAAbwxZN5v3"),
        (
            Coin::Ergo,
            "m/44'/429'/0'/0/0",
            "9fv2n41gttbUx8oqqhexi68qPfoETFPxnLEEbTfaTk4SmY2knYC",
        ),
        (Coin::Handshake, "m/44'/5353'/0'/0/0", "hs1q5400uxwpr3w6ydc2wsc0hd9jfqz7nqkkgzfvmd"),
        (Coin::Ethereum, "m/44'/60'/0'/0/0", "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"),
        (
            Coin::Algorand,
            "m/44'/283'/0'",
            "O2I5QUCIVTCO2CC5SBQ44CKIXPPX3ZVJFN4QVLZEDUY3PXFKII4MDFYMDM",
        ),
        (
            Coin::Monero,
            "m/44'/128'/0'",
            "44jKQv6ZKMd5ecLLmkNJGi7azgSptEq8ki7TFiat1TfLfdDQ1tQ7ZYa3cRh7X2uRwvLDjddWh97ajeyhR2seKSECQeDx1WR",
        ),
    ];

    for (coin, path, address) in expected {
        let first = first_address(coin);
        assert_eq!(first.path().to_string(), path, "{}", coin);
        assert_eq!(first.address().to_string(), address, "{}", coin);
    }
}

#[test]
fn wif_keys_use_coin_prefix() {
    let litecoin = first_address(Coin::Litecoin);
    assert_eq!(
        litecoin.private_key(),
        Some("T5ZCYhLqXu6EJKk2nhjvwsaLH357CisixhLGWpKXEiqWTUtzte6o")
    );
    assert_eq!(
        litecoin.public_key(),
        Some("02E49C9B9B5D0F127235DC26A0C252814C52FB333D651A946773F59D72C2DA9904")
    );

    let dogecoin = first_address(Coin::Dogecoin);
    assert_eq!(
        dogecoin.private_key(),
        Some("QPkeC1ZfHx3c9g7WTj9cQ8gnvk2iSAfAcbq1aVAWjNTwDAKfZUzx")
    );
    assert_eq!(
        dogecoin.public_key(),
        Some("02CC6B0DC33AABCF3A23643E5E2919A80C50FB3DD2129CE409BBC5F0D4643D05E0")
    );

    // Handshake reuses the Bitcoin WIF prefix
    let handshake = first_address(Coin::Handshake);
    assert_eq!(
        handshake.private_key(),
        Some("KzhBaTUaaTKDAE2S1EjqHAdLNwxyjUYZPvQs3kfXb4UrBbrmqu4p")
    );
}

#[test]
fn hex_keys_for_ripple_and_ergo() {
    let ripple = first_address(Coin::Ripple);
    assert_eq!(
        ripple.private_key(),
        Some("90802A50AA84EFB6CDB225F17C27616EA94048C179142FECF03F4712A07EA7A4")
    );
    assert_eq!(
        ripple.public_key(),
        Some("031D68BC1A142E6766B2BDFB006CCFE135EF2E0E2E94ABB5CF5C9AB6104776FBAE")
    );

    let ergo = first_address(Coin::Ergo);
    assert_eq!(
        ergo.private_key(),
        Some("5F112C3F6DF4976AA1FA7868023384D5992F8B9FBAE1DBEF829C4A671B6E32DD")
    );
}

#[test]
fn ethereum_second_address() {
    let generator = generator_for(Coin::Ethereum, &seed(), &with_keys()).unwrap();
    let wallet = generator
        .generate_wallet(
            Position::AccountChangeIndex {
                account: 0,
                change: 0,
                index: 1,
            },
            1,
        )
        .unwrap();

    let second = &wallet.addresses()[0];
    assert_eq!(second.path().to_string(), "m/44'/60'/0'/0/1");
    assert_eq!(
        second.address().to_string(),
        "0x6Fac4D18c912343BF86fa7049364Dd4E424Ab9C0"
    );
    assert_eq!(
        second.private_key(),
        Some("0x9a983cb3d832fbde5ab49d692b7a8bf5b5d232479c99333d0fc8e1d21f1b55b6")
    );
}

#[test]
fn avalanche_ledgers_share_one_key() {
    let first = first_address(Coin::Avalanche);
    assert_eq!(first.path().to_string(), "m/44'/9000'/0'/0/0");
    assert_eq!(
        first.ledger_address("X"),
        Some("X-avax1p9575chzhvcwvmvzaqh7yeld76r3af0ha56phl")
    );
    assert_eq!(
        first.ledger_address("P"),
        Some("P-avax1p9575chzhvcwvmvzaqh7yeld76r3af0ha56phl")
    );
    assert_eq!(
        first.ledger_address("C"),
        Some("0x38EDC949daC6a37Cf9d825e26f64aa2cb323cd82")
    );
    assert_eq!(
        first.private_key(),
        Some("PrivateKey-drMH6syofKMqTLNhqPictM2RzHr2uwx2tQLQGizwt8WJMmZUR")
    );
    assert_eq!(
        first.public_key(),
        Some("6Q1K9J8DKLdSKiWzd9pYRyeHUs9rDChFHvErAAFtAwrq5UEXMs")
    );
}

#[test]
fn algorand_keys_use_stellar_slot() {
    let generator = generator_for(Coin::Algorand, &seed(), &with_keys()).unwrap();
    let wallet = generator
        .generate_wallet(Position::Account { account: 0 }, 2)
        .unwrap();

    let first = &wallet.addresses()[0];
    assert_eq!(first.path().to_string(), "m/44'/283'/0'");
    assert_eq!(
        first.address().to_string(),
        "O2I5QUCIVTCO2CC5SBQ44CKIXPPX3ZVJFN4QVLZEDUY3PXFKII4MDFYMDM"
    );
    // key at m/44'/283'/0' would give SW4V6YBF...
    assert_ne!(
        first.address().to_string(),
        "SW4V6YBFO25EBGAK5KXMDURFMTIVOMYCHTLGV53ZIMS4JQMA3P5XYU73KQ"
    );
    assert_eq!(
        first.private_key(),
        Some("695DB2365365E06159F13CC752A5D3B0C7376C45012B2F695E3A4DA2434948BC")
    );
    assert_eq!(
        first.public_key(),
        Some("7691D85048ACC4ED085D9061CE0948BBDF7DE6A92B790AAF241D31B7DCAA4238")
    );

    let second = &wallet.addresses()[1];
    assert_eq!(second.path().to_string(), "m/44'/283'/1'");
    assert_eq!(
        second.address().to_string(),
        "5MWGE5ACOYAR434DMU4AI4HCYZ4ATDOHBIREB7M2NDEUS5UEUZXNNNEM6Y"
    );
}

#[test]
fn monero_account_keys() {
    let first = first_address(Coin::Monero);
    assert_eq!(
        first.private_key(),
        Some("8F2D521D4334F4D5D174C47AACB346E7633516416FAE089D74ECFD0C389A6B08")
    );
    assert_eq!(
        first.public_key(),
        Some("51FD81FAA5E2641BCA8A5C43D764AB276033C12B459FD9F5C9C23B7733AF67E6")
    );

    let path = AddressPath::account_level(purpose::BIP44, coin_type::MONERO, 0).unwrap();
    let node = Ed25519Deriver::derive_path(&seed(), &path).unwrap();
    let keys = MoneroKeys::from_node(&node);
    assert_eq!(
        hex::encode_upper(keys.private_view_key()),
        "84B0087A63854856686F80596A5A1A6090795B4D1311139173262170D7E7180F"
    );
    assert_eq!(keys.address(), first.address().to_string());
}

#[test]
fn quantity_semantics_hold_for_every_coin() {
    let seed = seed();
    let config = GeneratorConfig::default();

    for coin in Coin::ALL {
        let generator = generator_for(coin, &seed, &config).unwrap();
        let start = match generator.family() {
            PathFamily::AccountChangeIndex => Position::AccountChangeIndex {
                account: 2,
                change: 1,
                index: 10,
            },
            PathFamily::IndexOnly => Position::Index { index: 10 },
            PathFamily::AccountOnly => Position::Account { account: 10 },
        };

        let wallet = generator.generate_wallet(start, 4).unwrap();
        assert_eq!(wallet.addresses().len(), 4, "{}", coin);

        let first = wallet.addresses()[0].path().segments().to_vec();
        for (offset, address) in wallet.addresses().iter().enumerate() {
            let segments = address.path().segments();
            let last = segments.len() - 1;
            assert_eq!(&segments[..last], &first[..last], "{}", coin);
            assert_eq!(segments[last], first[last] + offset as u32, "{}", coin);
        }
    }
}

#[test]
fn derivation_is_deterministic_across_instances() {
    let seed = seed();
    for coin in Coin::ALL {
        let a = generator_for(coin, &seed, &with_keys()).unwrap();
        let b = generator_for(coin, &seed, &with_keys()).unwrap();
        assert_eq!(
            a.generate_default_wallet().unwrap(),
            b.generate_default_wallet().unwrap(),
            "{}",
            coin
        );
    }
}

#[test]
fn range_past_hardened_boundary_is_rejected() {
    let generator = generator_for(Coin::Ethereum, &seed(), &GeneratorConfig::default()).unwrap();
    let err = generator
        .generate_wallet(Position::Index { index: 0x7FFF_FFFE }, 3)
        .unwrap_err();
    assert!(matches!(err, WalletError::InvalidParameter(_)));
}

#[test]
fn avalanche_without_chains_is_rejected() {
    let config = GeneratorConfig {
        avalanche_chains: Vec::new(),
        ..GeneratorConfig::default()
    };
    let err = generator_for(Coin::Avalanche, &seed(), &config).err().expect("expected generator_for to fail");
    assert!(matches!(err, WalletError::InvalidParameter(_)));
}

#[test]
fn wallet_json_shape() {
    let generator = generator_for(Coin::Bitcoin, &seed(), &GeneratorConfig::default()).unwrap();
    let wallet = generator.generate_default_wallet().unwrap();
    let json = serde_json::to_value(&wallet).unwrap();

    assert_eq!(json["coin"], "BTC");
    assert_eq!(json["addresses"][0]["path"], "m/84'/0'/0'/0/0");
    assert!(json["addresses"][0].get("privateKey").is_none());
    assert_eq!(json["extendedPublicKey"]["path"], "m/84'/0'/0'");
}
