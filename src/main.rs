use std::rc::Rc;

use gloo_console::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::InputEvent;
use yew::prelude::*;

mod api;
mod calculator;
mod state;

use api::{Note, SavingsEntry, Transaction, TransactionKind};
use calculator::{format_number, Calculator, Operator};
use state::{
    advice_context, currency_symbol_for, default_settings, load_settings, resolve_profile,
    save_settings, strip_markup, summarize, AppAction, AppSettings, AppState, QUOTES,
};

#[derive(Clone, Copy, PartialEq)]
enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Copy, PartialEq)]
enum View {
    Dashboard,
    Transactions,
    Savings,
    Notes,
    Advisor,
    Calculator,
    Settings,
}

fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

fn format_currency(amount: f64, symbol: &str) -> String {
    let raw = if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    };
    format!("{} {}", symbol, format_number(&raw))
}

fn currency_from_context(settings: &Option<UseStateHandle<AppSettings>>) -> String {
    settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| default_settings().currency_symbol)
}

/// The one place the app-state context is resolved. `App` always provides
/// it above every view, and unlike settings there is no usable default to
/// fall back to without a provider.
#[hook]
fn use_app_state() -> UseReducerHandle<AppState> {
    use_context::<UseReducerHandle<AppState>>().expect("rendered inside the state provider")
}

fn oninput_value(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_view: View,
    on_select: Callback<View>,
    on_logout: Callback<()>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-slate-950 text-slate-200">
            <div class="hidden md:flex">
                <Sidebar active_view={props.active_view} on_select={props.on_select.clone()} on_logout={props.on_logout.clone()} />
            </div>
            <div class="flex-1 flex flex-col overflow-hidden">
                <header class="bg-slate-900/80 border-b border-white/10 h-16 flex items-center px-6">
                    <div class="text-2xl font-bold tracking-tight">
                        <span class="text-white">{"Rizq"}</span>
                        <span class="text-cyan-400">{"Planner"}</span>
                    </div>
                </header>
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    view: View,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_view: View,
    on_select: Callback<View>,
    on_logout: Callback<()>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            view: View::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Transactions",
            view: View::Transactions,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Savings",
            view: View::Savings,
            icon: icon_wallet,
        },
        NavItem {
            label: "Notes",
            view: View::Notes,
            icon: icon_note,
        },
        NavItem {
            label: "Advisor",
            view: View::Advisor,
            icon: icon_sparkles,
        },
        NavItem {
            label: "Calculator",
            view: View::Calculator,
            icon: icon_calculator,
        },
        NavItem {
            label: "Settings",
            view: View::Settings,
            icon: icon_settings,
        },
    ];

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="w-[220px] h-screen bg-slate-900 p-4 flex flex-col border-r border-white/10">
            <div class="flex-1 bg-slate-950/60 rounded-[24px] flex flex-col py-6 px-3">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.view == props.active_view;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-cyan-500/20 text-cyan-300 w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-400 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();
                        let view = item.view;
                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(view))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>
                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-400">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-white/10">
                <h1 class="text-2xl font-bold text-white">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    UpCircle,
    DownCircle,
    CreditCard,
    Wallet,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
    currency_symbol: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-slate-900/60 p-6 rounded-[10px] border border-white/5 flex justify-between items-start">
            <div>
                <p class="text-slate-400 text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-cyan-300 tracking-tight">{ format_currency(props.amount, &props.currency_symbol) }</h3>
            </div>
            <div class="p-3 bg-cyan-500/10 rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::UpCircle => icon_arrow_up_circle(),
                        StatIcon::DownCircle => icon_arrow_down_circle(),
                        StatIcon::CreditCard => icon_credit_card(),
                        StatIcon::Wallet => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}

#[function_component(DashboardView)]
fn dashboard_view() -> Html {
    let app = use_app_state();
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = currency_from_context(&settings);

    let show_add = use_state(|| false);
    let form_title = use_state(String::new);
    let form_amount = use_state(String::new);
    let form_date = use_state(today);
    let form_kind = use_state(|| TransactionKind::Expense);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let quote = use_memo(
        |_| {
            let idx = (js_sys::Math::random() * QUOTES.len() as f64) as usize;
            QUOTES[idx.min(QUOTES.len() - 1)]
        },
        (),
    );

    let totals = summarize(&app.transactions, &app.savings);
    let user = app.user.clone();

    let on_toggle_add = {
        let show_add = show_add.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            show_add.set(!*show_add);
            form_error.set(None);
        })
    };

    let on_submit = {
        let app = app.clone();
        let form_title = form_title.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_kind = form_kind.clone();
        let form_error = form_error.clone();
        let show_add = show_add.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let title = form_title.trim().to_string();
            let date = form_date.trim().to_string();
            let amount = form_amount.trim().parse::<f64>().unwrap_or(0.0);

            if title.is_empty() || date.is_empty() {
                form_error.set(Some("Please complete all fields.".to_string()));
                return;
            }
            if amount <= 0.0 {
                form_error.set(Some("Amount must be a positive number.".to_string()));
                return;
            }

            form_error.set(None);
            saving.set(true);

            let txn = Transaction {
                id: None,
                kind: *form_kind,
                amount,
                category: title,
                date,
            };

            let app = app.clone();
            let form_title = form_title.clone();
            let form_amount = form_amount.clone();
            let form_date = form_date.clone();
            let form_error = form_error.clone();
            let show_add = show_add.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::add_transaction(&txn).await {
                    Ok(created) => {
                        app.dispatch(AppAction::TransactionAdded(created));
                        form_title.set(String::new());
                        form_amount.set(String::new());
                        form_date.set(today());
                        show_add.set(false);
                    }
                    Err(err) => {
                        warn!(format!("add transaction failed: {}", err));
                        form_error.set(Some("Could not save the transaction.".to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let comparison = [
        ("Income", totals.income, "bg-emerald-500"),
        ("Expense", totals.expense, "bg-red-500"),
        ("Savings", totals.savings, "bg-cyan-500"),
    ];
    let comparison_max = comparison
        .iter()
        .map(|(_, v, _)| *v)
        .fold(0.0f64, f64::max);

    html! {
        { page_shell(
            "Dashboard",
            html! {
                <button onclick={on_toggle_add} class="flex items-center gap-2 bg-cyan-600 text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    { if *show_add { "Close" } else { "Add Transaction" } }
                </button>
            },
            html! {
                <>
                    {
                        if let Some(user) = &user {
                            html! {
                                <div class="flex items-center gap-5 pl-2">
                                    <div class="w-16 h-16 rounded-3xl bg-slate-800 border border-slate-700 overflow-hidden shrink-0">
                                        <img src={user.avatar_url.clone()} alt="Profile" class="w-full h-full object-cover" />
                                    </div>
                                    <div class="flex flex-col justify-center">
                                        <h2 class="text-xl font-bold text-white tracking-tight">
                                            {"স্বাগতম, "}<span class="text-cyan-400">{ user.name.clone() }</span>
                                        </h2>
                                        <p class="text-slate-400 italic text-sm">{ format!("\"{}\"", *quote) }</p>
                                    </div>
                                </div>
                            }
                        } else { html!{} }
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <StatCard title="Current Balance" amount={totals.balance} icon={StatIcon::CreditCard} currency_symbol={currency_symbol.clone()} />
                        <StatCard title="Total Income" amount={totals.income} icon={StatIcon::UpCircle} currency_symbol={currency_symbol.clone()} />
                        <StatCard title="Total Expense" amount={totals.expense} icon={StatIcon::DownCircle} currency_symbol={currency_symbol.clone()} />
                        <StatCard title="Total Savings" amount={totals.savings} icon={StatIcon::Wallet} currency_symbol={currency_symbol.clone()} />
                    </div>

                    <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                        <h3 class="font-bold text-white text-lg mb-4">{"Income vs Expense vs Savings"}</h3>
                        { if comparison_max <= 0.0 {
                            html! { <p class="text-sm text-slate-400">{"Add transactions to see the comparison."}</p> }
                        } else {
                            html! {
                                <div class="space-y-3">
                                    { for comparison.iter().map(|(label, value, color)| {
                                        let percent = (value / comparison_max * 100.0).round() as i64;
                                        html! {
                                            <div class="flex flex-col gap-1 text-sm">
                                                <div class="flex items-center justify-between">
                                                    <span class="text-slate-300">{ *label }</span>
                                                    <span class="text-slate-400">{ format_currency(*value, &currency_symbol) }</span>
                                                </div>
                                                <div class="h-2 w-full bg-slate-800 rounded-full overflow-hidden">
                                                    <div class={format!("h-full {}", color)} style={format!("width: {}%", percent)}></div>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }
                        }}
                    </div>

                    {
                        if *show_add {
                            html! {
                                <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                                    <div class="flex p-1 bg-slate-950 rounded-xl border border-white/5 mb-4 max-w-sm">
                                        <button type="button" onclick={{
                                            let form_kind = form_kind.clone();
                                            Callback::from(move |_| form_kind.set(TransactionKind::Expense))
                                        }} class={if *form_kind == TransactionKind::Expense {
                                            "flex-1 py-2 px-4 rounded-lg text-sm font-semibold bg-red-500 text-white"
                                        } else {
                                            "flex-1 py-2 px-4 rounded-lg text-sm font-semibold text-slate-400 hover:text-slate-200"
                                        }}>{"Expense"}</button>
                                        <button type="button" onclick={{
                                            let form_kind = form_kind.clone();
                                            Callback::from(move |_| form_kind.set(TransactionKind::Income))
                                        }} class={if *form_kind == TransactionKind::Income {
                                            "flex-1 py-2 px-4 rounded-lg text-sm font-semibold bg-emerald-500 text-white"
                                        } else {
                                            "flex-1 py-2 px-4 rounded-lg text-sm font-semibold text-slate-400 hover:text-slate-200"
                                        }}>{"Income"}</button>
                                    </div>
                                    <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                                        <input placeholder="Title / Category" value={(*form_title).clone()} oninput={oninput_value(form_title.clone())} class="p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                                        <input type="number" placeholder={format!("Amount ({})", currency_symbol)} value={(*form_amount).clone()} oninput={oninput_value(form_amount.clone())} class="p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                                        <input type="date" value={(*form_date).clone()} oninput={oninput_value(form_date.clone())} class="p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                                        <button onclick={on_submit} class="bg-cyan-600 text-white px-4 rounded" disabled={*saving}>{ if *saving { "Saving..." } else { "Save" } }</button>
                                    </div>
                                    {
                                        if let Some(msg) = &*form_error {
                                            html! { <p class="text-sm text-red-400 mt-3">{ msg.clone() }</p> }
                                        } else { html!{} }
                                    }
                                </div>
                            }
                        } else { html!{} }
                    }
                </>
            }
        ) }
    }
}

#[function_component(TransactionsView)]
fn transactions_view() -> Html {
    let app = use_app_state();
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = currency_from_context(&settings);

    let filter = use_state(|| TransactionKind::Expense);
    let totals = summarize(&app.transactions, &app.savings);

    let mut filtered: Vec<Transaction> = app
        .transactions
        .iter()
        .filter(|t| t.kind == *filter)
        .cloned()
        .collect();
    filtered.reverse();

    let on_delete = {
        let app = app.clone();
        Callback::from(move |id: i64| {
            app.dispatch(AppAction::TransactionRemoved(id));
            spawn_local(async move {
                if let Err(err) = api::delete_transaction(id).await {
                    warn!(format!("delete transaction failed: {}", err));
                }
            });
        })
    };

    let tab = |kind: TransactionKind, label: &'static str, value: f64, active_class: &'static str| {
        let filter = filter.clone();
        let is_active = *filter == kind;
        let class_name = if is_active {
            active_class
        } else {
            "rounded-2xl p-4 border border-white/5 bg-slate-900/40 hover:bg-slate-800/50 transition-all"
        };
        let symbol = currency_symbol.clone();
        html! {
            <button onclick={Callback::from(move |_| filter.set(kind))} class={class_name}>
                <div class="flex flex-col items-center gap-1">
                    <span class="text-sm font-medium text-slate-400">{ label }</span>
                    <span class="text-xl font-bold text-white">{ format_currency(value, &symbol) }</span>
                </div>
            </button>
        }
    };

    html! {
        { page_shell(
            "Transactions",
            html! {},
            html! {
                <>
                    <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5 text-center">
                        <p class="text-slate-400 text-sm mb-1">{"Current Balance"}</p>
                        <p class="text-4xl font-bold text-cyan-300 tracking-tight">{ format_currency(totals.balance, &currency_symbol) }</p>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        { tab(TransactionKind::Income, "Total Income", totals.income,
                              "rounded-2xl p-4 border border-emerald-500/50 bg-emerald-900/30 transition-all") }
                        { tab(TransactionKind::Expense, "Total Expense", totals.expense,
                              "rounded-2xl p-4 border border-red-500/50 bg-red-900/30 transition-all") }
                    </div>

                    <div class="space-y-3">
                        { if filtered.is_empty() {
                            html! {
                                <div class="text-center py-12 bg-slate-900/20 rounded-2xl border border-dashed border-slate-800">
                                    <p class="text-slate-500">{"No transactions yet."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    { for filtered.iter().map(|txn| {
                                        let amount_class = match txn.kind {
                                            TransactionKind::Income => "text-lg font-bold text-emerald-400",
                                            TransactionKind::Expense => "text-lg font-bold text-red-400",
                                        };
                                        let sign = match txn.kind {
                                            TransactionKind::Income => "+",
                                            TransactionKind::Expense => "-",
                                        };
                                        let delete = {
                                            let on_delete = on_delete.clone();
                                            let id = txn.id;
                                            Callback::from(move |_| {
                                                if let Some(id) = id {
                                                    on_delete.emit(id);
                                                }
                                            })
                                        };
                                        html! {
                                            <div class="flex justify-between items-center p-4 bg-slate-900/60 rounded-xl border border-white/5 hover:bg-slate-800/40 transition-all group">
                                                <div class="flex flex-col items-start gap-1 min-w-0">
                                                    <p class="font-bold text-white leading-tight truncate">{ txn.category.clone() }</p>
                                                    <span class="text-xs text-slate-500">{ txn.date.clone() }</span>
                                                </div>
                                                <div class="flex items-center gap-4 shrink-0">
                                                    <span class={amount_class}>{ format!("{} {}", sign, format_currency(txn.amount, &currency_symbol)) }</span>
                                                    <button onclick={delete} class="p-2 text-slate-600 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors">
                                                        { icon_trash() }
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(SavingsView)]
fn savings_view() -> Html {
    let app = use_app_state();
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = currency_from_context(&settings);

    let form_amount = use_state(String::new);
    let form_description = use_state(String::new);
    let saving = use_state(|| false);

    let total: f64 = app.savings.iter().map(|s| s.amount).sum();
    let count = app.savings.len();
    let mut entries: Vec<SavingsEntry> = app.savings.clone();
    entries.reverse();

    let on_add = {
        let app = app.clone();
        let form_amount = form_amount.clone();
        let form_description = form_description.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let amount = form_amount.trim().parse::<f64>().unwrap_or(0.0);
            if amount <= 0.0 {
                return;
            }
            let description = if form_description.trim().is_empty() {
                "সাধারণ সঞ্চয়".to_string()
            } else {
                form_description.trim().to_string()
            };
            saving.set(true);

            let entry = SavingsEntry {
                id: None,
                amount,
                description,
                date: today(),
            };
            let app = app.clone();
            let form_amount = form_amount.clone();
            let form_description = form_description.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::add_savings(&entry).await {
                    Ok(created) => {
                        app.dispatch(AppAction::SavingsAdded(created));
                        form_amount.set(String::new());
                        form_description.set(String::new());
                    }
                    Err(err) => warn!(format!("add savings failed: {}", err)),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let app = app.clone();
        Callback::from(move |id: i64| {
            app.dispatch(AppAction::SavingsRemoved(id));
            spawn_local(async move {
                if let Err(err) = api::delete_savings(id).await {
                    warn!(format!("delete savings failed: {}", err));
                }
            });
        })
    };

    html! {
        { page_shell(
            "Savings",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                            <p class="text-slate-400 text-sm mb-2">{"Total Savings"}</p>
                            <h3 class="text-3xl font-bold text-cyan-300">{ format_currency(total, &currency_symbol) }</h3>
                        </div>
                        <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                            <p class="text-slate-400 text-sm mb-2">{"Deposits"}</p>
                            <h3 class="text-3xl font-bold text-white">{ count }</h3>
                        </div>
                    </div>

                    <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                        <h4 class="text-cyan-300 font-bold text-[15px] mb-3">{"Add Deposit"}</h4>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                            <input type="number" placeholder={format!("Amount ({})", currency_symbol)} value={(*form_amount).clone()} oninput={oninput_value(form_amount.clone())} class="p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                            <input placeholder="Description (optional)" value={(*form_description).clone()} oninput={oninput_value(form_description.clone())} class="p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                            <button onclick={on_add} class="bg-cyan-600 text-white px-4 py-2 rounded font-bold text-sm" disabled={*saving}>{ if *saving { "Saving..." } else { "Deposit" } }</button>
                        </div>
                    </div>

                    <div class="space-y-3">
                        { if entries.is_empty() {
                            html! {
                                <div class="text-center py-12 bg-slate-900/20 rounded-2xl border border-dashed border-slate-800">
                                    <p class="text-slate-500">{"No deposits yet."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    { for entries.iter().map(|entry| {
                                        let delete = {
                                            let on_delete = on_delete.clone();
                                            let id = entry.id;
                                            Callback::from(move |_| {
                                                if let Some(id) = id {
                                                    on_delete.emit(id);
                                                }
                                            })
                                        };
                                        html! {
                                            <div class="flex justify-between items-center p-4 bg-slate-900/60 rounded-xl border border-white/5 hover:bg-slate-800/40 transition-all">
                                                <div class="flex items-center gap-4">
                                                    <div class="p-3 rounded-xl bg-cyan-500/10 text-cyan-400">{ icon_wallet() }</div>
                                                    <p class="font-bold text-white leading-tight">{ entry.description.clone() }</p>
                                                </div>
                                                <div class="flex items-center gap-4">
                                                    <span class="text-lg font-bold text-cyan-400">{ format!("+ {}", format_currency(entry.amount, &currency_symbol)) }</span>
                                                    <button onclick={delete} class="p-2 text-slate-600 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors">
                                                        { icon_trash() }
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}

#[function_component(NotesView)]
fn notes_view() -> Html {
    let app = use_app_state();

    let form_title = use_state(String::new);
    let form_content = use_state(String::new);
    let saving = use_state(|| false);

    let mut notes: Vec<Note> = app.notes.clone();
    notes.reverse();

    let on_add = {
        let app = app.clone();
        let form_title = form_title.clone();
        let form_content = form_content.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let title = form_title.trim().to_string();
            let content = form_content.trim().to_string();
            if title.is_empty() || content.is_empty() {
                return;
            }
            saving.set(true);

            let note = Note {
                id: None,
                title,
                content,
                date: today(),
            };
            let app = app.clone();
            let form_title = form_title.clone();
            let form_content = form_content.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api::add_note(&note).await {
                    Ok(created) => {
                        app.dispatch(AppAction::NoteAdded(created));
                        form_title.set(String::new());
                        form_content.set(String::new());
                    }
                    Err(err) => warn!(format!("add note failed: {}", err)),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let app = app.clone();
        Callback::from(move |id: i64| {
            app.dispatch(AppAction::NoteRemoved(id));
            spawn_local(async move {
                if let Err(err) = api::delete_note(id).await {
                    warn!(format!("delete note failed: {}", err));
                }
            });
        })
    };

    let add_disabled =
        *saving || form_title.trim().is_empty() || form_content.trim().is_empty();

    html! {
        { page_shell(
            "Notes",
            html! {},
            html! {
                <>
                    <div class="bg-slate-900/60 rounded-[10px] p-6 border-t-4 border-t-cyan-500 border border-white/5">
                        <h4 class="text-cyan-300 font-bold text-[15px] mb-3">{"New Note"}</h4>
                        <div class="space-y-3">
                            <input placeholder="Title" value={(*form_title).clone()} oninput={oninput_value(form_title.clone())} class="w-full p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                            <textarea placeholder="Write the details..." value={(*form_content).clone()} oninput={{
                                let form_content = form_content.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                    form_content.set(input.value());
                                })
                            }} class="w-full p-2 bg-slate-950/50 border border-slate-700 rounded text-white min-h-[100px]" />
                            <div class="flex justify-end">
                                <button onclick={on_add} class="bg-cyan-600 text-white px-6 py-2 rounded font-bold text-sm" disabled={add_disabled}>
                                    { if *saving { "Saving..." } else { "Save Note" } }
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { if notes.is_empty() {
                            html! {
                                <div class="col-span-full py-12 text-center text-slate-500 bg-slate-900/20 rounded-2xl border border-dashed border-slate-800">
                                    <p>{"No notes yet. Add one above."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    { for notes.iter().map(|note| {
                                        let delete = {
                                            let on_delete = on_delete.clone();
                                            let id = note.id;
                                            Callback::from(move |_| {
                                                if let Some(id) = id {
                                                    on_delete.emit(id);
                                                }
                                            })
                                        };
                                        html! {
                                            <div class="relative bg-slate-900/80 border border-white/10 p-6 rounded-2xl hover:bg-slate-800/80 transition-all group">
                                                <button onclick={delete} class="absolute top-4 right-4 p-2 bg-red-500/10 text-red-400 rounded-lg hover:bg-red-500 hover:text-white transition-colors opacity-0 group-hover:opacity-100">
                                                    { icon_trash() }
                                                </button>
                                                <h3 class="text-xl font-bold text-white mb-3 pr-8 leading-snug">{ note.title.clone() }</h3>
                                                <div class="w-12 h-1 bg-cyan-500/50 rounded-full mb-4"></div>
                                                <p class="text-slate-300 text-sm leading-relaxed whitespace-pre-wrap">{ note.content.clone() }</p>
                                            </div>
                                        }
                                    }) }
                                </>
                            }
                        }}
                    </div>
                </>
            }
        ) }
    }
}

const COMMON_QUESTIONS: &[&str] = &[
    "কিভাবে সঞ্চয় শুরু করব?",
    "জরুরী তহবিল কত টাকা রাখা উচিত?",
    "বাজেট করার সঠিক নিয়ম কি?",
    "ঋণ মুক্ত হওয়ার উপায় কি?",
    "বিনিয়োগ কোথায় করা ভালো?",
    "আয় বাড়ানোর উপায় কি?",
    "অপ্রয়োজনীয় খরচ কমানোর উপায়?",
    "দীর্ঘমেয়াদী আর্থিক পরিকল্পনা কি?",
];

#[function_component(AdvisorView)]
fn advisor_view() -> Html {
    let app = use_app_state();

    let response = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let ask = {
        let app = app.clone();
        let response = response.clone();
        let loading = loading.clone();
        Callback::from(move |question: String| {
            loading.set(true);
            response.set(None);

            let context = advice_context(&app.transactions);
            let response = response.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::request_advice(&question, &context).await {
                    Ok(text) => response.set(Some(strip_markup(&text))),
                    Err(err) => {
                        warn!(format!("advice request failed: {}", err));
                        response.set(Some(
                            "একটি ত্রুটি ঘটেছে। দয়া করে আবার চেষ্টা করুন।".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_general = {
        let ask = ask.clone();
        Callback::from(move |_| {
            ask.emit("আমার বর্তমান আর্থিক অবস্থা বিবেচনা করে একটি সংক্ষিপ্ত পরামর্শ দিন।".to_string())
        })
    };

    let on_reset = {
        let response = response.clone();
        Callback::from(move |_| response.set(None))
    };

    html! {
        { page_shell(
            "Advisor",
            html! {},
            html! {
                <>
                    {
                        if *loading {
                            html! {
                                <div class="bg-slate-900/40 rounded-[10px] border border-cyan-500/20 py-16 text-center">
                                    <p class="text-slate-300 font-medium text-lg">{"আপনার তথ্যের ভিত্তিতে পরামর্শ তৈরি করা হচ্ছে..."}</p>
                                    <p class="text-slate-500 text-sm mt-2">{"অল্প কিছুক্ষণ অপেক্ষা করুন"}</p>
                                </div>
                            }
                        } else if let Some(text) = &*response {
                            html! {
                                <div class="bg-slate-900/60 rounded-[10px] border border-cyan-500/30 p-6">
                                    <div class="mb-4 flex items-center gap-3">
                                        <div class="p-2 bg-cyan-500/20 rounded-lg">{ icon_sparkles() }</div>
                                        <h3 class="text-xl font-bold text-white">{"রিজক অ্যাডভাইস"}</h3>
                                    </div>
                                    <p class="text-slate-200 text-lg leading-relaxed whitespace-pre-line">{ text.clone() }</p>
                                    <div class="mt-6 flex justify-end">
                                        <button onclick={on_reset} class="text-sm text-cyan-400 border border-cyan-500/30 px-4 py-2 rounded-xl hover:bg-cyan-500/10 transition-colors">
                                            {"অন্য প্রশ্ন জিজ্ঞাসা করুন"}
                                        </button>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    <div class="bg-slate-900/60 rounded-[10px] border border-white/10 py-12 text-center flex flex-col items-center">
                                        <div class="p-4 bg-cyan-500/10 rounded-full mb-4">{ icon_sparkles() }</div>
                                        <h3 class="text-xl font-bold text-white mb-2">{"স্বাগতম রিজক অ্যাডভাইজরে"}</h3>
                                        <p class="text-slate-400 max-w-md mb-6">{"নিচের প্রশ্নগুলো থেকে বাছাই করুন অথবা সাধারণ পরামর্শ নিন।"}</p>
                                        <button onclick={on_general} class="px-8 py-3 bg-cyan-600 text-white rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                                            {"আমার আর্থিক বিশ্লেষণ দেখুন"}
                                        </button>
                                    </div>
                                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-3">
                                        { for COMMON_QUESTIONS.iter().map(|q| {
                                            let ask = ask.clone();
                                            let question = q.to_string();
                                            html! {
                                                <button onclick={Callback::from(move |_| ask.emit(question.clone()))}
                                                    class="p-4 rounded-xl bg-slate-800/40 border border-white/5 hover:bg-slate-800 hover:border-cyan-500/30 text-left transition-all">
                                                    <span class="text-slate-300 text-sm font-medium">{ *q }</span>
                                                </button>
                                            }
                                        }) }
                                    </div>
                                </>
                            }
                        }
                    }
                </>
            }
        ) }
    }
}

enum CalcAction {
    Digit(char),
    Op(Operator),
    Equals,
    Delete,
    Clear,
}

struct CalcState(Calculator);

impl Reducible for CalcState {
    type Action = CalcAction;

    fn reduce(self: Rc<Self>, action: CalcAction) -> Rc<Self> {
        let mut calc = self.0.clone();
        match action {
            CalcAction::Digit(d) => calc.append_digit(d),
            CalcAction::Op(op) => calc.choose_operator(op),
            CalcAction::Equals => calc.compute_result(),
            CalcAction::Delete => calc.delete_last(),
            CalcAction::Clear => calc.clear_all(),
        }
        Rc::new(CalcState(calc))
    }
}

#[function_component(CalculatorView)]
fn calculator_view() -> Html {
    let calc = use_reducer(|| CalcState(Calculator::new()));

    let dispatch = |action: fn() -> CalcAction| {
        let calc = calc.clone();
        Callback::from(move |_| calc.dispatch(action()))
    };

    let digit = |d: char| {
        let calc = calc.clone();
        Callback::from(move |_| calc.dispatch(CalcAction::Digit(d)))
    };
    let double_zero = {
        let calc = calc.clone();
        Callback::from(move |_| {
            calc.dispatch(CalcAction::Digit('0'));
            calc.dispatch(CalcAction::Digit('0'));
        })
    };
    let op = |o: Operator| {
        let calc = calc.clone();
        Callback::from(move |_| calc.dispatch(CalcAction::Op(o)))
    };

    let display = if calc.0.current().is_empty() {
        "0".to_string()
    } else {
        format_number(calc.0.current())
    };

    let num_btn = "flex items-center justify-center text-2xl font-semibold rounded-2xl py-4 bg-slate-800/40 text-white border border-white/5 hover:bg-slate-800/60 transition-all active:scale-95";
    let op_btn = "flex items-center justify-center text-2xl font-semibold rounded-2xl py-4 bg-cyan-600/20 text-cyan-400 border border-cyan-500/20 hover:bg-cyan-600/30 transition-all active:scale-95";
    let action_btn = "flex items-center justify-center text-2xl font-semibold rounded-2xl py-4 bg-slate-800/40 text-slate-400 border border-white/5 hover:bg-slate-800/60 transition-all active:scale-95";
    let equal_btn = "flex items-center justify-center text-2xl font-semibold rounded-2xl py-4 bg-cyan-600 text-white transition-all active:scale-95";

    html! {
        { page_shell(
            "Calculator",
            html! {},
            html! {
                <div class="w-full max-w-md mx-auto">
                    <div class="w-full bg-slate-950 rounded-[2.5rem] border border-white/10 overflow-hidden p-6">
                        <div class="h-36 flex flex-col justify-end items-end mb-6 px-4">
                            <div class="w-full overflow-x-auto text-right mb-1">
                                <span class="text-slate-500 font-medium text-lg whitespace-nowrap">
                                    { if calc.0.expression().is_empty() { " ".to_string() } else { calc.0.expression().to_string() } }
                                </span>
                            </div>
                            <div class="w-full overflow-x-auto text-right">
                                <h1 class="text-5xl font-bold text-white tracking-tighter whitespace-nowrap leading-none py-2">
                                    { display }
                                </h1>
                            </div>
                        </div>

                        <div class="grid grid-cols-4 gap-3">
                            <button onclick={dispatch(|| CalcAction::Clear)} class={format!("{} text-red-400 font-bold", action_btn)}>{"AC"}</button>
                            <button onclick={dispatch(|| CalcAction::Delete)} class={action_btn}>{"⌫"}</button>
                            <button onclick={op(Operator::Percent)} class={action_btn}>{"%"}</button>
                            <button onclick={op(Operator::Divide)} class={op_btn}>{"÷"}</button>

                            <button onclick={digit('7')} class={num_btn}>{"7"}</button>
                            <button onclick={digit('8')} class={num_btn}>{"8"}</button>
                            <button onclick={digit('9')} class={num_btn}>{"9"}</button>
                            <button onclick={op(Operator::Multiply)} class={op_btn}>{"×"}</button>

                            <button onclick={digit('4')} class={num_btn}>{"4"}</button>
                            <button onclick={digit('5')} class={num_btn}>{"5"}</button>
                            <button onclick={digit('6')} class={num_btn}>{"6"}</button>
                            <button onclick={op(Operator::Subtract)} class={op_btn}>{"−"}</button>

                            <button onclick={digit('1')} class={num_btn}>{"1"}</button>
                            <button onclick={digit('2')} class={num_btn}>{"2"}</button>
                            <button onclick={digit('3')} class={num_btn}>{"3"}</button>
                            <button onclick={op(Operator::Add)} class={op_btn}>{"+"}</button>

                            <button onclick={digit('0')} class={num_btn}>{"0"}</button>
                            <button onclick={double_zero} class={num_btn}>{"00"}</button>
                            <button onclick={digit('.')} class={num_btn}>{"."}</button>
                            <button onclick={dispatch(|| CalcAction::Equals)} class={equal_btn}>{"="}</button>
                        </div>
                    </div>

                    {
                        if !calc.0.history().is_empty() {
                            html! {
                                <div class="mt-6 bg-slate-900/60 rounded-2xl border border-white/5 p-4">
                                    <p class="text-slate-400 text-xs font-bold uppercase tracking-widest mb-3">{"History"}</p>
                                    <ul class="space-y-2">
                                        { for calc.0.history().iter().map(|entry| html! {
                                            <li class="text-sm text-slate-300 font-mono">{ entry.clone() }</li>
                                        }) }
                                    </ul>
                                </div>
                            }
                        } else { html!{} }
                    }
                </div>
            }
        ) }
    }
}

#[function_component(SettingsView)]
fn settings_view() -> Html {
    let app = use_app_state();
    let settings = use_context::<UseStateHandle<AppSettings>>();

    let user = app.user.clone();
    let form_name = use_state(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let form_avatar = use_state(|| {
        user.as_ref()
            .map(|u| u.avatar_url.clone())
            .unwrap_or_default()
    });
    let saving = use_state(|| false);
    let saved = use_state(|| false);

    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| default_settings().currency_code);

    let on_currency_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let code = input.value();
                let symbol = currency_symbol_for(&code).to_string();
                let next = AppSettings {
                    currency_code: code,
                    currency_symbol: symbol,
                };
                save_settings(&next);
                settings.set(next);
            }
        })
    };

    let on_save = {
        let app = app.clone();
        let form_name = form_name.clone();
        let form_avatar = form_avatar.clone();
        let saving = saving.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            let name = form_name.trim().to_string();
            if name.is_empty() {
                return;
            }
            saving.set(true);
            saved.set(false);

            let update = api::ProfileUpdate {
                name,
                avatar_url: form_avatar.trim().to_string(),
            };
            let app = app.clone();
            let saving = saving.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match api::update_profile(&update).await {
                    Ok(row) => {
                        let email = app
                            .user
                            .as_ref()
                            .map(|u| u.email.clone())
                            .unwrap_or_default();
                        app.dispatch(AppAction::ProfileUpdated(resolve_profile(
                            Some(&row),
                            None,
                            &email,
                        )));
                        saved.set(true);
                    }
                    Err(err) => warn!(format!("profile update failed: {}", err)),
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                        <h2 class="text-xl font-bold text-white mb-6">{"Profile"}</h2>
                        <div class="space-y-4">
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-slate-300">{"Name"}</label>
                                <input value={(*form_name).clone()} oninput={oninput_value(form_name.clone())} class="w-full p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                            </div>
                            <div class="space-y-1">
                                <label class="text-sm font-medium text-slate-300">{"Avatar URL"}</label>
                                <input value={(*form_avatar).clone()} oninput={oninput_value(form_avatar.clone())} class="w-full p-2 bg-slate-950/50 border border-slate-700 rounded text-white" />
                            </div>
                            {
                                if let Some(user) = &user {
                                    html! {
                                        <div class="space-y-1">
                                            <label class="text-sm font-medium text-slate-300">{"Email"}</label>
                                            <div class="w-full p-2 bg-slate-900/50 border border-slate-800 rounded text-slate-400 cursor-not-allowed">{ user.email.clone() }</div>
                                        </div>
                                    }
                                } else { html!{} }
                            }
                            <button onclick={on_save} class="w-full bg-cyan-600 text-white py-2 rounded font-bold text-sm" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Update Profile" } }
                            </button>
                            {
                                if *saved {
                                    html! { <p class="text-sm text-emerald-400">{"Profile updated."}</p> }
                                } else { html!{} }
                            }
                        </div>
                    </div>

                    <div class="bg-slate-900/60 rounded-[10px] p-6 border border-white/5">
                        <h2 class="text-xl font-bold text-white mb-6">{"Preferences"}</h2>
                        <label class="block text-sm font-medium text-slate-300 mb-2">{"Currency"}</label>
                        <select value={current_currency} onchange={on_currency_change} class="w-full px-4 py-2 bg-slate-950/50 border border-slate-700 rounded-lg text-white">
                            <option value="BDT">{"BDT (৳)"}</option>
                            <option value="USD">{"USD ($)"}</option>
                            <option value="EUR">{"EUR (€)"}</option>
                            <option value="GBP">{"GBP (£)"}</option>
                            <option value="JPY">{"JPY (¥)"}</option>
                        </select>
                        <p class="text-xs text-slate-500 mt-2">{"Currency updates apply across the dashboard and reports."}</p>
                    </div>
                </div>
            }
        ) }
    }
}

#[derive(Properties, PartialEq)]
struct AuthScreenProps {
    on_authenticated: Callback<String>,
}

#[function_component(AuthScreen)]
fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let confirm_val = (*confirm_password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }
            if password_val.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if !*is_login && password_val != confirm_val {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let register = !*is_login;
            let on_authenticated = on_authenticated.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match api::authenticate(&email_val, &password_val, register).await {
                    Ok(account_email) => on_authenticated.emit(account_email),
                    Err(api::ApiError::Status(_)) => {
                        error.set(Some("Login failed. Check your credentials.".to_string()));
                    }
                    Err(_) => error.set(Some("Network error".to_string())),
                }
                loading.set(false);
            });
        })
    };

    let toggle_mode = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(!*is_login))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-950">
            <div class="w-full max-w-md bg-slate-900 border border-white/10 rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-white">{ if *is_login { "Welcome back" } else { "Create account" } }</h1>
                    <p class="text-sm text-slate-400 mt-2">
                        { if *is_login { "Sign in to continue." } else { "Start managing your finances." } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-300">{"Email"}</label>
                        <input type="email" class="w-full px-4 py-2 bg-slate-950/50 border border-slate-700 rounded-lg text-white"
                            value={(*email).clone()} oninput={oninput_value(email.clone())} />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-300">{"Password"}</label>
                        <input type="password" class="w-full px-4 py-2 bg-slate-950/50 border border-slate-700 rounded-lg text-white"
                            value={(*password).clone()} oninput={oninput_value(password.clone())} />
                    </div>

                    if !*is_login {
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-slate-300">{"Confirm Password"}</label>
                            <input type="password" class="w-full px-4 py-2 bg-slate-950/50 border border-slate-700 rounded-lg text-white"
                                value={(*confirm_password).clone()} oninput={oninput_value(confirm_password.clone())} />
                        </div>
                    }

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-400">{ msg.clone() }</div>
                    }

                    <button type="submit" class="w-full bg-cyan-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity" disabled={*loading}>
                        { if *loading { "Please wait..." } else if *is_login { "Login" } else { "Sign up" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-slate-400">
                    { if *is_login { "No account?" } else { "Already have an account?" } }
                    <button class="ml-2 text-cyan-400 font-semibold" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Login" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

async fn start_session(app: UseReducerHandle<AppState>, email: String) {
    let profile_row = match api::fetch_profile().await {
        Ok(row) => Some(row),
        Err(err) => {
            warn!(format!("profile fetch failed: {}", err));
            None
        }
    };
    let transactions = api::fetch_transactions().await.unwrap_or_else(|err| {
        warn!(format!("transactions fetch failed: {}", err));
        Vec::new()
    });
    let notes = api::fetch_notes().await.unwrap_or_else(|err| {
        warn!(format!("notes fetch failed: {}", err));
        Vec::new()
    });
    let savings = api::fetch_savings().await.unwrap_or_else(|err| {
        warn!(format!("savings fetch failed: {}", err));
        Vec::new()
    });

    let user = resolve_profile(profile_row.as_ref(), None, &email);
    app.dispatch(AppAction::SessionStarted {
        user,
        transactions,
        notes,
        savings,
    });
}

#[function_component(App)]
fn app() -> Html {
    let active_view = use_state(|| View::Dashboard);
    let auth_status = use_state(|| AuthStatus::Checking);
    let settings = use_state(load_settings);
    let app = use_reducer(AppState::default);

    let on_select = {
        let active_view = active_view.clone();
        Callback::from(move |view: View| active_view.set(view))
    };

    {
        let auth_status = auth_status.clone();
        let app = app.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::refresh_session().await {
                        Ok(Some(email)) => {
                            start_session(app, email).await;
                            auth_status.set(AuthStatus::Authenticated);
                        }
                        Ok(None) | Err(_) => {
                            auth_status.set(AuthStatus::Unauthenticated);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_authenticated = {
        let auth_status = auth_status.clone();
        let app = app.clone();
        Callback::from(move |email: String| {
            let auth_status = auth_status.clone();
            let app = app.clone();
            spawn_local(async move {
                start_session(app, email).await;
                auth_status.set(AuthStatus::Authenticated);
            });
        })
    };

    let on_logout = {
        let auth_status = auth_status.clone();
        let active_view = active_view.clone();
        let app = app.clone();
        Callback::from(move |_| {
            let auth_status = auth_status.clone();
            let active_view = active_view.clone();
            let app = app.clone();
            spawn_local(async move {
                if let Err(err) = api::logout().await {
                    warn!(format!("logout failed: {}", err));
                }
                app.dispatch(AppAction::SessionEnded);
                active_view.set(View::Dashboard);
                auth_status.set(AuthStatus::Unauthenticated);
            });
        })
    };

    if *auth_status == AuthStatus::Checking {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-950 text-slate-400">
                {"লোড হচ্ছে..."}
            </div>
        };
    }

    if *auth_status == AuthStatus::Unauthenticated {
        return html! { <AuthScreen on_authenticated={on_authenticated} /> };
    }

    let content = match *active_view {
        View::Dashboard => html! { <DashboardView /> },
        View::Transactions => html! { <TransactionsView /> },
        View::Savings => html! { <SavingsView /> },
        View::Notes => html! { <NotesView /> },
        View::Advisor => html! { <AdvisorView /> },
        View::Calculator => html! { <CalculatorView /> },
        View::Settings => html! { <SettingsView /> },
    };

    html! {
        <ContextProvider<UseReducerHandle<AppState>> context={app}>
            <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
                <Layout active_view={*active_view} on_select={on_select} on_logout={on_logout}>
                    { content }
                </Layout>
            </ContextProvider<UseStateHandle<AppSettings>>>
        </ContextProvider<UseReducerHandle<AppState>>>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
fn icon_note() -> Html {
    icon_base("M5 3h14v18H5zM9 7h6M9 11h6M9 15h4")
}
fn icon_sparkles() -> Html {
    icon_base("M12 3l1.5 4.5L18 9l-4.5 1.5L12 15l-1.5-4.5L6 9l4.5-1.5zM19 16l.75 2.25L22 19l-2.25.75L19 22l-.75-2.25L16 19l2.25-.75z")
}
fn icon_calculator() -> Html {
    icon_base("M5 3h14v18H5zM9 7h6M8 12h.01M12 12h.01M16 12h.01M8 16h.01M12 16h.01M16 16h.01")
}
fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
fn icon_trash() -> Html {
    icon_base("M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6M10 11v6M14 11v6")
}
fn icon_arrow_up_circle() -> Html {
    icon_base("M12 21a9 9 0 100-18 9 9 0 000 18zM16 12l-4-4-4 4M12 16V8")
}
fn icon_arrow_down_circle() -> Html {
    icon_base("M12 21a9 9 0 100-18 9 9 0 000 18zM8 12l4 4 4-4M12 8v8")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
