//! Nivesh Dash entry point
//!
//! WASM: wires form inputs to record update + recompute + save + render,
//! plus the export download and import upload. Native: logs a demo run of
//! every calculator.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use nivesh_dash::pages::{
        EpfPage, LoanPage, LumpsumPage, NetWorthPage, PpfPage, RetirementPage, SipPage, SwpPage,
    };
    use nivesh_dash::store::export;
    use nivesh_dash::{Settings, consts, ui};

    /// Input element ids and recompute hook for one dashboard page
    struct PageBinding {
        inputs: &'static [&'static str],
        sync: fn(&Settings),
    }

    const BINDINGS: &[PageBinding] = &[
        PageBinding {
            inputs: &[
                "lumpsum-principal",
                "lumpsum-rate",
                "lumpsum-years",
                "lumpsum-inflation",
            ],
            sync: sync_lumpsum,
        },
        PageBinding {
            inputs: &["sip-deposit", "sip-rate", "sip-years", "sip-stepup"],
            sync: sync_sip,
        },
        PageBinding {
            inputs: &[
                "swp-corpus",
                "swp-rate",
                "swp-withdrawal",
                "swp-inflation",
                "swp-horizon",
            ],
            sync: sync_swp,
        },
        PageBinding {
            inputs: &["loan-principal", "loan-rate", "loan-months", "loan-extra"],
            sync: sync_loan,
        },
        PageBinding {
            inputs: &["ppf-deposit", "ppf-rate", "ppf-years"],
            sync: sync_ppf,
        },
        PageBinding {
            inputs: &[
                "epf-basic",
                "epf-employee-pct",
                "epf-employer-pct",
                "epf-rate",
                "epf-years",
                "epf-stepup",
            ],
            sync: sync_epf,
        },
        PageBinding {
            inputs: &[
                "ret-corpus",
                "ret-expense",
                "ret-years-to",
                "ret-inflation",
                "ret-equity-pct",
                "ret-debt-pct",
                "ret-cash-pct",
                "ret-horizon",
            ],
            sync: sync_retirement,
        },
    ];

    pub fn run() {
        console_log::init_with_level(log::Level::Info).ok();
        console_error_panic_hook::set_once();
        log::info!("Nivesh Dash starting");

        let settings = Settings::load();
        sync_all(&settings);
        wire_inputs();
        wire_export();
        wire_import();
    }

    /// Recompute and render every page from its stored record
    fn sync_all(settings: &Settings) {
        for binding in BINDINGS {
            (binding.sync)(settings);
        }
        render_networth(settings);
    }

    /// Attach an `input` listener per field that re-reads, saves, and
    /// re-renders its page on every keystroke
    fn wire_inputs() {
        let Some(doc) = ui::document() else { return };
        for binding in BINDINGS {
            let sync = binding.sync;
            for &id in binding.inputs {
                let Some(el) = doc.get_element_by_id(id) else {
                    log::warn!("Input #{id} not in document; skipping");
                    continue;
                };
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    sync(&Settings::load());
                });
                let _ =
                    el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn sync_lumpsum(settings: &Settings) {
        let mut page = LumpsumPage::load();
        if let Some(v) = ui::input_f64("lumpsum-principal") {
            page.principal = v;
        }
        if let Some(v) = ui::input_f64("lumpsum-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_u32("lumpsum-years") {
            page.years = v;
        }
        if let Some(v) = ui::input_f64("lumpsum-inflation") {
            page.inflation_pct = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("lumpsum-fv", &settings.format(r.future_value));
        ui::set_text("lumpsum-gain", &settings.format(r.wealth_gained));
        ui::set_text("lumpsum-real-fv", &settings.format(r.real_future_value));
    }

    fn sync_sip(settings: &Settings) {
        let mut page = SipPage::load();
        if let Some(v) = ui::input_f64("sip-deposit") {
            page.monthly_deposit = v;
        }
        if let Some(v) = ui::input_f64("sip-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_u32("sip-years") {
            page.years = v;
        }
        if let Some(v) = ui::input_f64("sip-stepup") {
            page.stepup_pct = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("sip-invested", &settings.format(r.invested));
        ui::set_text("sip-fv", &settings.format(r.future_value));
        ui::set_text("sip-gain", &settings.format(r.wealth_gained));
    }

    fn sync_swp(settings: &Settings) {
        let mut page = SwpPage::load();
        if let Some(v) = ui::input_f64("swp-corpus") {
            page.corpus = v;
        }
        if let Some(v) = ui::input_f64("swp-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_f64("swp-withdrawal") {
            page.monthly_withdrawal = v;
        }
        if let Some(v) = ui::input_f64("swp-inflation") {
            page.inflation_pct = v;
        }
        if let Some(v) = ui::input_u32("swp-horizon") {
            page.horizon_years = v;
        }
        page.save();
        let r = page.compute();
        let years = r.months_lasted / consts::MONTHS_PER_YEAR;
        let months = r.months_lasted % consts::MONTHS_PER_YEAR;
        ui::set_text("swp-lasts", &format!("{years}y {months}m"));
        ui::set_text(
            "swp-verdict",
            if r.depleted {
                "Corpus runs out before the horizon"
            } else {
                "Corpus outlives the horizon"
            },
        );
        ui::set_text("swp-withdrawn", &settings.format(r.total_withdrawn));
        ui::set_text("swp-final", &settings.format(r.final_balance));
    }

    fn sync_loan(settings: &Settings) {
        let mut page = LoanPage::load();
        if let Some(v) = ui::input_f64("loan-principal") {
            page.principal = v;
        }
        if let Some(v) = ui::input_f64("loan-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_u32("loan-months") {
            page.months = v;
        }
        if let Some(v) = ui::input_f64("loan-extra") {
            page.extra_monthly = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("loan-emi", &settings.format(r.emi));
        ui::set_text("loan-months-taken", &r.months.to_string());
        ui::set_text("loan-interest", &settings.format(r.total_interest));
        ui::set_text("loan-total", &settings.format(r.total_payment));
    }

    fn sync_ppf(settings: &Settings) {
        let mut page = PpfPage::load();
        if let Some(v) = ui::input_f64("ppf-deposit") {
            page.annual_deposit = v;
        }
        if let Some(v) = ui::input_f64("ppf-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_u32("ppf-years") {
            page.years = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("ppf-deposited", &settings.format(r.total_deposited));
        ui::set_text("ppf-interest", &settings.format(r.total_interest));
        ui::set_text("ppf-maturity", &settings.format(r.maturity));
    }

    fn sync_epf(settings: &Settings) {
        let mut page = EpfPage::load();
        if let Some(v) = ui::input_f64("epf-basic") {
            page.monthly_basic = v;
        }
        if let Some(v) = ui::input_f64("epf-employee-pct") {
            page.employee_pct = v;
        }
        if let Some(v) = ui::input_f64("epf-employer-pct") {
            page.employer_pct = v;
        }
        if let Some(v) = ui::input_f64("epf-rate") {
            page.annual_rate_pct = v;
        }
        if let Some(v) = ui::input_u32("epf-years") {
            page.years = v;
        }
        if let Some(v) = ui::input_f64("epf-stepup") {
            page.salary_stepup_pct = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("epf-employee", &settings.format(r.total_employee));
        ui::set_text("epf-employer", &settings.format(r.total_employer));
        ui::set_text("epf-interest", &settings.format(r.total_interest));
        ui::set_text("epf-maturity", &settings.format(r.maturity));
    }

    fn sync_retirement(settings: &Settings) {
        let mut page = RetirementPage::load();
        if let Some(v) = ui::input_f64("ret-corpus") {
            page.corpus = v;
        }
        if let Some(v) = ui::input_f64("ret-expense") {
            page.annual_expense_today = v;
        }
        if let Some(v) = ui::input_u32("ret-years-to") {
            page.years_to_retirement = v;
        }
        if let Some(v) = ui::input_f64("ret-inflation") {
            page.inflation_pct = v;
        }
        if let Some(v) = ui::input_f64("ret-equity-pct") {
            page.allocation.equity_pct = v;
        }
        if let Some(v) = ui::input_f64("ret-debt-pct") {
            page.allocation.debt_pct = v;
        }
        if let Some(v) = ui::input_f64("ret-cash-pct") {
            page.allocation.cash_pct = v;
        }
        if let Some(v) = ui::input_u32("ret-horizon") {
            page.horizon_years = v;
        }
        page.save();
        let r = page.compute();
        ui::set_text("ret-expense-at", &settings.format(r.expense_at_retirement));
        ui::set_text("ret-blended", &format!("{:.2}%", r.blended_return_pct));
        ui::set_text("ret-fire", &settings.format(r.fire_number));
        ui::set_text("ret-lasts", &format!("{} years", r.years_lasted));
        ui::set_text(
            "ret-verdict",
            if r.sustains_horizon {
                "Corpus outlives the plan"
            } else {
                "Corpus falls short"
            },
        );
    }

    /// Net worth renders from the stored record; row CRUD has its own page
    fn render_networth(settings: &Settings) {
        let page = NetWorthPage::load();
        let s = page.compute();
        ui::set_text("nw-assets", &settings.format(s.total_assets));
        ui::set_text("nw-liabilities", &settings.format(s.total_liabilities));
        ui::set_text("nw-net", &settings.format(s.net_worth));
        let alloc: Vec<String> = s
            .allocation
            .iter()
            .map(|a| format!("{} {:.1}%", a.category, a.pct))
            .collect();
        ui::set_text("nw-allocation", &alloc.join(" · "));
    }

    /// "Export" downloads the envelope as a JSON file
    fn wire_export() {
        let Some(doc) = ui::document() else { return };
        let Some(btn) = doc.get_element_by_id("export-btn") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(doc) = ui::document() else { return };
            let json = export::export_json();
            let parts = js_sys::Array::new();
            parts.push(&JsValue::from_str(&json));
            let opts = web_sys::BlobPropertyBag::new();
            opts.set_type("application/json");
            let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts) else {
                ui::toast("Export failed", true);
                return;
            };
            let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
                ui::toast("Export failed", true);
                return;
            };
            let anchor = doc
                .create_element("a")
                .ok()
                .and_then(|a| a.dyn_into::<web_sys::HtmlAnchorElement>().ok());
            if let Some(anchor) = anchor {
                anchor.set_href(&url);
                anchor.set_download("nivesh-dash-export.json");
                anchor.click();
                ui::toast("Exported all pages", false);
            }
            let _ = web_sys::Url::revoke_object_url(&url);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// "Import" reads a chosen file and overwrites the pages it carries;
    /// a bad file toasts and changes nothing
    fn wire_import() {
        let Some(doc) = ui::document() else { return };
        let Some(input) = doc.get_element_by_id("import-file") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(file_input) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = file_input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(reader) = web_sys::FileReader::new() else {
                ui::toast("Import failed: file reader unavailable", true);
                return;
            };
            let reader_for_load = reader.clone();
            let onload = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let text = reader_for_load.result().ok().and_then(|r| r.as_string());
                let Some(text) = text else {
                    ui::toast("Import failed: could not read file", true);
                    return;
                };
                match export::import_json(&text) {
                    Ok(count) => {
                        ui::toast(&format!("Imported {count} pages"), false);
                        sync_all(&Settings::load());
                    }
                    Err(e) => ui::toast(&format!("Import failed: {e}"), true),
                }
            });
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            if reader.read_as_text(&file).is_err() {
                ui::toast("Import failed: could not read file", true);
            }
        });
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nivesh_dash::format_inr;
    use nivesh_dash::pages::{
        EpfPage, LoanPage, LumpsumPage, PpfPage, RetirementPage, SipPage, SwpPage,
    };

    env_logger::init();
    log::info!("Nivesh Dash (native) - calculator demo; run with `trunk serve` for the dashboard");

    let lumpsum = LumpsumPage::default().compute();
    println!("Lumpsum FV:       {}", format_inr(lumpsum.future_value));

    let sip = SipPage::default().compute();
    println!("SIP FV:           {}", format_inr(sip.future_value));

    let swp = SwpPage::default().compute();
    println!(
        "SWP lasts:        {}y {}m",
        swp.months_lasted / 12,
        swp.months_lasted % 12
    );

    let loan = LoanPage::default().compute();
    println!("Loan EMI:         {}", format_inr(loan.emi));

    let ppf = PpfPage::default().compute();
    println!("PPF maturity:     {}", format_inr(ppf.maturity));

    let epf = EpfPage::default().compute();
    println!("EPF maturity:     {}", format_inr(epf.maturity));

    let ret = RetirementPage::default().compute();
    println!(
        "Retirement:       {} years ({})",
        ret.years_lasted,
        if ret.sustains_horizon { "sustains" } else { "falls short" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
