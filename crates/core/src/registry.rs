use crate::error::GenerateError;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Which network a registry entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Mainnet,
    Testnet,
}

/// Describes a cryptocurrency the wallet tool knows how to derive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptocurrencyDescriptor {
    /// Ticker passed to the tool (e.g. "BTC", "BTCTEST").
    pub symbol: &'static str,
    pub name: &'static str,
    /// SLIP-44 coin type used in the BIP-44 derivation path.
    pub coin_type: u32,
    pub network: Network,
}

const fn coin(
    symbol: &'static str,
    name: &'static str,
    coin_type: u32,
    network: Network,
) -> CryptocurrencyDescriptor {
    CryptocurrencyDescriptor {
        symbol,
        name,
        coin_type,
        network,
    }
}

/// Every cryptocurrency the wallet tool can derive, sorted by symbol.
static CRYPTOCURRENCIES: &[CryptocurrencyDescriptor] = &[
    coin("AC", "Asiacoin", 51, Network::Mainnet),
    coin("AGM", "Argoneum", 421, Network::Mainnet),
    coin("ANON", "Anon", 220, Network::Mainnet),
    coin("ATOM", "Atom", 223, Network::Mainnet),
    coin("AUR", "Auroracoin", 85, Network::Mainnet),
    coin("AXE", "Axe", 4242, Network::Mainnet),
    coin("AYA", "Aryacoin", 357, Network::Mainnet),
    coin("BCH", "Bitcoin Cash", 145, Network::Mainnet),
    coin("BEET", "Beetle Coin", 800, Network::Mainnet),
    coin("BELA", "Bela Coin", 73, Network::Mainnet),
    coin("BLK", "Blackcoin", 10, Network::Mainnet),
    coin("BND", "Blocknode", 2941, Network::Mainnet),
    coin("BNDTEST", "Blocknode", 1, Network::Testnet),
    coin("BOLI", "Bolivarcoin", 278, Network::Mainnet),
    coin("BRIT", "Brit Coin", 70, Network::Mainnet),
    coin("BSD", "Bit Send", 91, Network::Mainnet),
    coin("BST", "Block Stamp", 254, Network::Mainnet),
    coin("BSV", "Bitcoin SV", 236, Network::Mainnet),
    coin("BTA", "Bata", 89, Network::Mainnet),
    coin("BTC", "Bitcoin", 0, Network::Mainnet),
    coin("BTCTEST", "Bitcoin", 1, Network::Testnet),
    coin("BTCZ", "BitcoinZ", 177, Network::Mainnet),
    coin("BTDX", "Bit Cloud", 218, Network::Mainnet),
    coin("BTG", "Bitcoin Gold", 156, Network::Mainnet),
    coin("BTX", "Bitcore", 160, Network::Mainnet),
    coin("CCN", "Cannacoin", 19, Network::Mainnet),
    coin("CDN", "Canada eCoin", 34, Network::Mainnet),
    coin("CLAM", "Clams", 23, Network::Mainnet),
    coin("CLUB", "Club Coin", 79, Network::Mainnet),
    coin("CMP", "Compcoin", 71, Network::Mainnet),
    coin("CPU", "CPU Chain", 363, Network::Mainnet),
    coin("CRAVE", "Crave", 186, Network::Mainnet),
    coin("CRP", "Crane Pay", 2304, Network::Mainnet),
    coin("DASH", "Dash", 5, Network::Mainnet),
    coin("DASHTEST", "Dash", 1, Network::Testnet),
    coin("DFC", "Defcoin", 1337, Network::Mainnet),
    coin("DGB", "Digi Byte", 20, Network::Mainnet),
    coin("DGC", "Digitalcoin", 18, Network::Mainnet),
    coin("DMD", "Diamond", 152, Network::Mainnet),
    coin("DNR", "Denarius", 116, Network::Mainnet),
    coin("DOGE", "Dogecoin", 3, Network::Mainnet),
    coin("DOGETEST", "Dogecoin", 1, Network::Testnet),
    coin("ECN", "Ecoin", 115, Network::Mainnet),
    coin("EDRC", "EDR Coin", 56, Network::Mainnet),
    coin("ELA", "Elastos", 2305, Network::Mainnet),
    coin("EMC2", "Einsteinium", 41, Network::Mainnet),
    coin("ERC", "Europe Coin", 151, Network::Mainnet),
    coin("ETC", "Ethereum Classic", 61, Network::Mainnet),
    coin("ETH", "Ethereum", 60, Network::Mainnet),
    coin("EXCL", "Exclusive Coin", 190, Network::Mainnet),
    coin("FIX", "FIX", 336, Network::Mainnet),
    coin("FIXTEST", "FIX", 1, Network::Testnet),
    coin("FJC", "Fuji Coin", 75, Network::Mainnet),
    coin("FLASH", "Flashcoin", 120, Network::Mainnet),
    coin("FRST", "Firstcoin", 167, Network::Mainnet),
    coin("FTC", "Feathercoin", 8, Network::Mainnet),
    coin("GAME", "Game Credits", 101, Network::Mainnet),
    coin("GBX", "Go Byte", 176, Network::Mainnet),
    coin("GCR", "GCR Coin", 49, Network::Mainnet),
    coin("GRC", "Gridcoin", 84, Network::Mainnet),
    coin("GRS", "Groestl Coin", 17, Network::Mainnet),
    coin("GRSTEST", "Groestl Coin", 1, Network::Testnet),
    coin("HNC", "Helleniccoin", 168, Network::Mainnet),
    coin("HUSH", "Hush", 197, Network::Mainnet),
    coin("INSN", "Insane Coin", 68, Network::Mainnet),
    coin("IOP", "Internet Of People", 66, Network::Mainnet),
    coin("IXC", "IX Coin", 86, Network::Mainnet),
    coin("JBS", "Jumbucks", 26, Network::Mainnet),
    coin("KMD", "Komodo", 141, Network::Mainnet),
    coin("KOBO", "Kobocoin", 196, Network::Mainnet),
    coin("LBC", "LBRY Credits", 140, Network::Mainnet),
    coin("LCC", "Litecoin Cash", 192, Network::Mainnet),
    coin("LINX", "Linx", 114, Network::Mainnet),
    coin("LKR", "Lkrcoin", 557, Network::Mainnet),
    coin("LTC", "Litecoin", 2, Network::Mainnet),
    coin("LTCTEST", "Litecoin", 1, Network::Testnet),
    coin("LTZ", "LitecoinZ", 221, Network::Mainnet),
    coin("LYNX", "Lynx", 191, Network::Mainnet),
    coin("MEC", "Megacoin", 217, Network::Mainnet),
    coin("MNX", "Minexcoin", 182, Network::Mainnet),
    coin("MONA", "Monacoin", 22, Network::Mainnet),
    coin("MONK", "Monkey Project", 214, Network::Mainnet),
    coin("MZC", "Mazacoin", 13, Network::Mainnet),
    coin("NAV", "Navcoin", 130, Network::Mainnet),
    coin("NBT", "NuBits", 12, Network::Mainnet),
    coin("NEBL", "Neblio", 146, Network::Mainnet),
    coin("NEOS", "Neoscoin", 25, Network::Mainnet),
    coin("NIX", "NIX", 400, Network::Mainnet),
    coin("NLG", "Gulden", 87, Network::Mainnet),
    coin("NMC", "Namecoin", 7, Network::Mainnet),
    coin("NRG", "Energi", 9797, Network::Mainnet),
    coin("NRO", "Neurocoin", 110, Network::Mainnet),
    coin("NSR", "NuShares", 11, Network::Mainnet),
    coin("NVC", "Novacoin", 50, Network::Mainnet),
    coin("NYC", "New York Coin", 179, Network::Mainnet),
    coin("OK", "OK Cash", 69, Network::Mainnet),
    coin("OMNI", "Omni", 200, Network::Mainnet),
    coin("OMNITEST", "Omni", 1, Network::Testnet),
    coin("ONION", "Deep Onion", 305, Network::Mainnet),
    coin("ONX", "Onix Coin", 174, Network::Mainnet),
    coin("PHR", "Phore", 444, Network::Mainnet),
    coin("PINK", "Pinkcoin", 117, Network::Mainnet),
    coin("PIVX", "Pivx", 119, Network::Mainnet),
    coin("PIVXTEST", "Pivx", 1, Network::Testnet),
    coin("POSW", "Posw Coin", 47, Network::Mainnet),
    coin("POT", "Potcoin", 81, Network::Mainnet),
    coin("PPC", "Peercoin", 6, Network::Mainnet),
    coin("PRJ", "Project Coin", 533, Network::Mainnet),
    coin("PSB", "Pesobit", 62, Network::Mainnet),
    coin("PUT", "Putincoin", 122, Network::Mainnet),
    coin("QTUM", "Qtum", 2301, Network::Mainnet),
    coin("QTUMTEST", "Qtum", 1, Network::Testnet),
    coin("RBTC", "RSK", 137, Network::Mainnet),
    coin("RBTCTEST", "RSK", 37310, Network::Testnet),
    coin("RBY", "Rubycoin", 16, Network::Mainnet),
    coin("RDD", "Reddcoin", 4, Network::Mainnet),
    coin("RPD", "Rapids", 320, Network::Mainnet),
    coin("RVN", "Ravencoin", 175, Network::Mainnet),
    coin("SAFE", "Safecoin", 19165, Network::Mainnet),
    coin("SCRIBE", "Scribe", 545, Network::Mainnet),
    coin("SDC", "Shadow Cash", 35, Network::Mainnet),
    coin("SDCTEST", "Shadow Cash", 1, Network::Testnet),
    coin("SLM", "Slimcoin", 63, Network::Mainnet),
    coin("SLMTEST", "Slimcoin", 111, Network::Testnet),
    coin("SLR", "Solarcoin", 58, Network::Mainnet),
    coin("SLS", "Saluscoin", 572, Network::Mainnet),
    coin("SMLY", "Smileycoin", 59, Network::Mainnet),
    coin("STASH", "Stash", 49344, Network::Mainnet),
    coin("STRAT", "Stratis", 105, Network::Mainnet),
    coin("STRATTEST", "Stratis", 105, Network::Testnet),
    coin("SUGAR", "Sugarchain", 408, Network::Mainnet),
    coin("SYS", "Syscoin", 57, Network::Mainnet),
    coin("THC", "Hempcoin", 113, Network::Mainnet),
    coin("THT", "Thought AI", 1618, Network::Mainnet),
    coin("TOA", "TOA Coin", 159, Network::Mainnet),
    coin("TRX", "Tron", 195, Network::Mainnet),
    coin("TUGAR", "Sugarchain", 408, Network::Testnet),
    coin("TWINS", "Twins", 970, Network::Mainnet),
    coin("TWINSTEST", "Twins", 1, Network::Testnet),
    coin("UNO", "Unobtanium", 92, Network::Mainnet),
    coin("USC", "Ultimate Secure Cash", 112, Network::Mainnet),
    coin("VASH", "Vcash", 33, Network::Mainnet),
    coin("VIA", "Viacoin", 14, Network::Mainnet),
    coin("VIATEST", "Viacoin", 1, Network::Testnet),
    coin("VIVO", "Vivo", 166, Network::Mainnet),
    coin("VTC", "Vertcoin", 28, Network::Mainnet),
    coin("WC", "Wincoin", 181, Network::Mainnet),
    coin("XAX", "Artax", 219, Network::Mainnet),
    coin("XBC", "Bitcoin Plus", 65, Network::Mainnet),
    coin("XDC", "XinFin", 550, Network::Mainnet),
    coin("XMY", "Myriadcoin", 90, Network::Mainnet),
    coin("XUEZ", "XUEZ", 225, Network::Mainnet),
    coin("XVG", "Verge Currency", 77, Network::Mainnet),
    coin("XWC", "Whitecoin", 155, Network::Mainnet),
    coin("YEC", "Ycash", 347, Network::Mainnet),
    coin("ZCL", "ZClassic", 147, Network::Mainnet),
    coin("ZEC", "Zcash", 133, Network::Mainnet),
    coin("ZECTEST", "Zcash", 1, Network::Testnet),
    coin("ZEN", "Zencash", 121, Network::Mainnet),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Read-only lookup from symbol to descriptor.
///
/// The table is kept sorted by symbol for binary search.
/// Matching is exact and case-sensitive: `"BTC"` resolves, `"btc"` and
/// `" BTC"` do not. Callers must not normalize symbols before lookup.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    entries: &'static [CryptocurrencyDescriptor],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The built-in table of supported cryptocurrencies.
    pub fn builtin() -> Self {
        Self {
            entries: CRYPTOCURRENCIES,
        }
    }

    /// Resolve a symbol to exactly one descriptor.
    pub fn lookup(&self, symbol: &str) -> Result<&'static CryptocurrencyDescriptor, GenerateError> {
        let entries = self.entries;
        entries
            .binary_search_by(|c| c.symbol.cmp(symbol))
            .map(|i| &entries[i])
            .map_err(|_| GenerateError::InvalidSymbol(symbol.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = &'static CryptocurrencyDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that `symbol` names a known cryptocurrency.
///
/// This is the only gate between untrusted input and the tool's argv.
pub fn validate_symbol(
    registry: &Registry,
    symbol: &str,
) -> Result<&'static CryptocurrencyDescriptor, GenerateError> {
    registry.lookup(symbol)
}
