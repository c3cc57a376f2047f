use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domestic brokerage commission, charged on both sides.
pub const DOMESTIC_COMMISSION_RATE: f64 = 0.000_15;
/// Overseas brokerage commission, charged on both sides.
pub const OVERSEAS_COMMISSION_RATE: f64 = 0.002_5;
/// Korean securities transaction tax, charged on domestic sells only.
pub const SECURITIES_TAX_RATE: f64 = 0.001_8;

/// Where a position is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "KOR")]
    Kor,
    #[serde(rename = "OVERSEAS")]
    Overseas,
}

impl Market {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kor => "KOR",
            Self::Overseas => "OVERSEAS",
        }
    }

    /// Commission rate for one side of a trade.
    #[must_use]
    pub const fn commission_rate(self) -> f64 {
        match self {
            Self::Kor => DOMESTIC_COMMISSION_RATE,
            Self::Overseas => OVERSEAS_COMMISSION_RATE,
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One owned position. All amounts are computed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub stock_code: String,
    pub stock_name: String,
    pub market: Market,
    pub quantity: f64,
    pub average_price: f64,
    pub current_price: f64,
    /// Roughly `quantity * current_price`.
    pub valuation: f64,
    pub profit_loss: f64,
    /// Percent.
    pub return_rate: f64,
    #[serde(default)]
    pub days_gain: f64,
}

impl PortfolioHolding {
    /// Acquisition cost of the position.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_price
    }
}

/// Every holding plus the server's aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(rename = "portfolio", default)]
    pub holdings: Vec<PortfolioHolding>,
    pub total_assets: f64,
    pub total_profit_loss: f64,
    /// Percent.
    pub total_return_rate: f64,
    #[serde(default)]
    pub total_days_gain: f64,
}

/// Totals over the holdings of one market.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Subtotal {
    pub valuation: f64,
    pub profit_loss: f64,
    /// Percent of the market's cost basis; zero when nothing was invested.
    pub return_rate: f64,
    pub days_gain: f64,
}

impl Portfolio {
    /// Holdings listed in `market`, in server order.
    pub fn holdings_in(&self, market: Market) -> impl Iterator<Item = &PortfolioHolding> {
        self.holdings.iter().filter(move |h| h.market == market)
    }

    /// Per-market subtotal, as shown on a market tab.
    ///
    /// Derived from the holdings; the portfolio-wide `total_*` fields stay as the server sent them.
    #[must_use]
    pub fn subtotal(&self, market: Market) -> Subtotal {
        let mut out = Subtotal::default();
        let mut cost = 0.0;
        for h in self.holdings_in(market) {
            out.valuation += h.valuation;
            out.profit_loss += h.profit_loss;
            out.days_gain += h.days_gain;
            cost += h.cost_basis();
        }
        if cost > 0.0 {
            out.return_rate = out.profit_loss / cost * 100.0;
        }
        out
    }

    /// The holding for `stock_code`, if owned.
    pub fn find(&self, stock_code: &str) -> Option<&PortfolioHolding> {
        self.holdings.iter().find(|h| h.stock_code == stock_code)
    }
}

/// A buy/sell instruction, built right before it is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeTicket {
    pub stock_code: String,
    pub stock_name: String,
    pub market: Market,
    #[serde(rename = "transaction_type")]
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
    #[serde(rename = "transaction_date")]
    pub date: NaiveDate,
}

/// Client-side cost breakdown of a [`TradeTicket`].
///
/// This is an approximation made with fixed published rates. The backend settles with its
/// own numbers and the two are never reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeeEstimate {
    /// `quantity * price`.
    pub gross: f64,
    pub commission: f64,
    pub transaction_tax: f64,
    /// Cash paid for a buy (gross plus fees) or received for a sell (gross minus fees).
    pub net: f64,
}

impl TradeTicket {
    /// Estimates commission, tax and the net cash movement.
    #[must_use]
    pub fn estimate(&self) -> FeeEstimate {
        let gross = self.quantity * self.price;
        let commission = gross * self.market.commission_rate();
        let transaction_tax = match (self.market, self.side) {
            (Market::Kor, TradeSide::Sell) => gross * SECURITIES_TAX_RATE,
            _ => 0.0,
        };
        let net = match self.side {
            TradeSide::Buy => gross + commission,
            TradeSide::Sell => gross - commission - transaction_tax,
        };
        FeeEstimate {
            gross,
            commission,
            transaction_tax,
            net,
        }
    }
}

/// A live quote. The backend answers `{ "price": .. }` (older builds: `current_price`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LivePrice {
    #[serde(alias = "current_price")]
    pub price: f64,
}

/// Acknowledgement of a recorded trade. Both fields are optional; an empty body is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradeConfirmation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
