//! The text report: computes every processing view over a [`Dataset`] and renders it.
//!
//! Most callers should use [`run_report`], which builds a [`Report`] with [`build_report`] and
//! writes it with [`Report::render`]. If [`ReportOptions::observer`] is set, section progress and
//! unresolved product references are reported to it.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::observability::{ReportEvent, ReportObserver, ReportSection};
use crate::processing::{
    did_user_buy_product, find_max, top_buyer_by_spent, top_expensive_products,
    total_spent_per_user, unresolved_purchases, users_older_than, DEFAULT_TOP_N,
};
use crate::types::{Amount, Dataset, Product, ProductId, User, UserId};

/// Options controlling which views a report computes.
///
/// Use [`Default`] for the standard report.
#[derive(Clone)]
pub struct ReportOptions {
    /// Users strictly older than this are listed in the age section.
    pub age_threshold: i64,
    /// How many products the top-N section lists.
    pub top_n: usize,
    /// User side of the membership check.
    pub check_user_id: UserId,
    /// Product side of the membership check.
    pub check_product_id: ProductId,
    /// Optional observer for progress logging.
    pub observer: Option<Arc<dyn ReportObserver>>,
}

impl fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportOptions")
            .field("age_threshold", &self.age_threshold)
            .field("top_n", &self.top_n)
            .field("check_user_id", &self.check_user_id)
            .field("check_product_id", &self.check_product_id)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            age_threshold: 21,
            top_n: DEFAULT_TOP_N,
            check_user_id: 1,
            check_product_id: 2,
            observer: None,
        }
    }
}

/// Every computed view of a report, plus the parameters used to compute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub age_threshold: i64,
    pub top_n: usize,
    pub check_user_id: UserId,
    pub check_product_id: ProductId,
    /// All users, input order.
    pub users: Vec<User>,
    pub older_users: Vec<User>,
    pub top_products: Vec<Product>,
    /// Whether `check_user_id` bought `check_product_id`.
    pub user_bought_product: bool,
    pub spent_per_user: BTreeMap<UserId, Amount>,
    pub top_buyer: Option<User>,
    pub most_expensive: Option<Product>,
}

/// Compute every report section over `dataset`.
pub fn build_report(dataset: &Dataset, options: &ReportOptions) -> Report {
    let start = Instant::now();
    let emit = |event: ReportEvent| {
        if let Some(obs) = options.observer.as_ref() {
            obs.on_event(&event);
        }
    };
    let section = |section: ReportSection, items: usize| {
        emit(ReportEvent::SectionStarted { section });
        emit(ReportEvent::SectionFinished { section, items });
    };

    emit(ReportEvent::RunStarted);

    let users = dataset.users.clone();
    section(ReportSection::AllUsers, users.len());

    let older_users = users_older_than(&dataset.users, options.age_threshold);
    section(ReportSection::OlderUsers, older_users.len());

    let top_products = top_expensive_products(&dataset.products, options.top_n);
    section(ReportSection::TopProducts, top_products.len());

    let user_bought_product = did_user_buy_product(
        &dataset.purchases,
        options.check_user_id,
        options.check_product_id,
    );
    section(ReportSection::PurchaseCheck, 1);

    emit(ReportEvent::SectionStarted {
        section: ReportSection::SpentPerUser,
    });
    for p in unresolved_purchases(&dataset.products, &dataset.purchases) {
        emit(ReportEvent::UnresolvedProduct {
            user_id: p.user_id,
            product_id: p.product_id,
        });
    }
    let spent_per_user = total_spent_per_user(&dataset.users, &dataset.products, &dataset.purchases);
    emit(ReportEvent::SectionFinished {
        section: ReportSection::SpentPerUser,
        items: spent_per_user.len(),
    });

    let top_buyer = top_buyer_by_spent(&dataset.users, &spent_per_user);
    section(ReportSection::TopBuyer, 1);

    let most_expensive = find_max(&dataset.products, |p| p.price).cloned();
    section(ReportSection::MostExpensive, 1);

    emit(ReportEvent::RunFinished {
        elapsed: start.elapsed(),
    });

    Report {
        age_threshold: options.age_threshold,
        top_n: options.top_n,
        check_user_id: options.check_user_id,
        check_product_id: options.check_product_id,
        users,
        older_users,
        top_products,
        user_bought_product,
        spent_per_user,
        top_buyer,
        most_expensive,
    }
}

impl Report {
    /// Write the report as text sections, each under a `=== title ===` header.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== All users ===")?;
        for u in &self.users {
            writeln!(out, "{u}")?;
        }

        writeln!(out, "\n=== Users older than {} ===", self.age_threshold)?;
        for u in &self.older_users {
            writeln!(out, "{u}")?;
        }

        writeln!(out, "\n=== Top {} most expensive products ===", self.top_n)?;
        for p in &self.top_products {
            writeln!(out, "{p}")?;
        }

        writeln!(
            out,
            "\n=== Check: did user={} buy product={} ===",
            self.check_user_id, self.check_product_id
        )?;
        writeln!(out, "{}", self.user_bought_product)?;

        writeln!(out, "\n=== Total spent per user (userId -> sum) ===")?;
        for (id, sum) in &self.spent_per_user {
            writeln!(out, "{id} -> {sum}")?;
        }

        writeln!(out, "\n=== Top buyer ===")?;
        match &self.top_buyer {
            Some(u) => writeln!(out, "{u}")?,
            None => writeln!(out, "no data")?,
        }

        writeln!(out, "\n=== Generic find_max: most expensive product ===")?;
        match &self.most_expensive {
            Some(p) => writeln!(out, "{p}")?,
            None => writeln!(out, "no products")?,
        }
        Ok(())
    }

    /// Render the report to a `String`.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serialize the computed views as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the report for `dataset` and write it to `out`.
pub fn run_report<W: Write>(
    dataset: &Dataset,
    options: &ReportOptions,
    out: &mut W,
) -> io::Result<Report> {
    let report = build_report(dataset, options);
    report.render(out)?;
    Ok(report)
}
