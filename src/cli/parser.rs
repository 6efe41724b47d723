use crate::api::ReportKind;
use crate::export::ExportFormat;
use crate::models::{ArrivalStatus, PeriodKind, Role};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for courtbook
/// CLI client for a sports-court booking backend
#[derive(Parser)]
#[command(
    name = "courtbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book sports courts by the hour, manage courts, clients and users, and read reports",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://localhost:5000/api)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Override the file holding the session token
    #[arg(global = true, long = "token-file")]
    pub token_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and store the session token
    Login {
        email: String,

        #[arg(long = "password", help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Create an account and log in with it
    Register {
        name: String,
        email: String,

        #[arg(long = "password", help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show the weekly booking grid of a court
    Grid {
        /// Court id or name
        court: String,

        #[command(flatten)]
        week: WeekArgs,
    },

    /// Create or update the booking of one slot
    Book {
        #[command(flatten)]
        slot: SlotArgs,

        #[arg(long = "client", help = "Client name (matched against known clients)")]
        client: Option<String>,

        #[arg(long = "deposit", help = "Deposit paid (must not be negative)")]
        deposit: Option<f64>,

        #[arg(long = "note", help = "Deposit note")]
        note: Option<String>,

        #[arg(long = "arrived", conflicts_with = "not_arrived", help = "Mark the client as arrived (admin only)")]
        arrived: bool,

        #[arg(long = "not-arrived", help = "Mark the client as not arrived (admin only)")]
        not_arrived: bool,

        #[arg(long = "add-client", help = "Create the client first when the name is unknown (admin only)")]
        add_client: bool,
    },

    /// Delete the booking of one slot
    Unbook {
        #[command(flatten)]
        slot: SlotArgs,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Make a booking repeat weekly for a year, or stop repeating it
    Permanent {
        #[command(flatten)]
        slot: SlotArgs,

        #[arg(long = "off", help = "Remove the permanent flag")]
        off: bool,
    },

    /// Manage courts
    Courts {
        #[command(subcommand)]
        action: CourtAction,
    },

    /// Manage clients
    Clients {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage users (admin)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Client and financial reports
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },

    /// Print the server activity log
    Logs {
        #[arg(long = "date", help = "Only entries of this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "user", help = "Only entries whose user contains this text")]
        user: Option<String>,

        #[arg(long = "time", help = "Only entries whose time starts with this (HH or HH:MM)")]
        time: Option<String>,
    },

    /// Export a court's week to a file
    Export {
        /// Court id or name
        court: String,

        #[command(flatten)]
        week: WeekArgs,

        #[arg(
            long = "format",
            value_enum,
            help = "Output format (default: from the --file extension, else xlsx)"
        )]
        format: Option<ExportFormat>,

        #[arg(long = "file", help = "Output file (default: Bookings_<court>_<start>_<end>.<ext>)")]
        file: Option<String>,

        #[arg(long = "force", help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

/// Which week to show.
#[derive(Args, Clone, Debug)]
pub struct WeekArgs {
    #[arg(long = "date", help = "Any day of the week (YYYY-MM-DD, default: today)")]
    pub date: Option<String>,

    #[arg(
        long = "week",
        allow_hyphen_values = true,
        default_value_t = 0,
        help = "Weeks to move from --date (e.g. 1 for next week, -1 for the previous one)"
    )]
    pub offset: i64,
}

/// One hour cell of a court's grid.
#[derive(Args, Clone, Debug)]
pub struct SlotArgs {
    /// Court id or name
    pub court: String,

    /// Day (YYYY-MM-DD)
    pub date: String,

    /// Hour, 6 to 23 (e.g. 14 or 14:00)
    pub hour: String,
}

#[derive(Subcommand)]
pub enum CourtAction {
    /// List all courts with their pricing
    List,

    /// Create a court
    Add {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "color", help = "Display color as #RRGGBB")]
        color: String,

        #[command(flatten)]
        pricing: PricingArgs,

        #[arg(long = "original", conflicts_with = "no_original", help = "Also create the restricted original copy")]
        original: bool,

        #[arg(long = "no-original", help = "Do not create the original copy")]
        no_original: bool,
    },

    /// Update a court
    Edit {
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "color", help = "Display color as #RRGGBB")]
        color: Option<String>,

        #[command(flatten)]
        pricing: PricingArgs,
    },

    /// Delete a court
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List the original courts (asks for the password again)
    Originals {
        #[arg(long = "password", help = "Password (prompted when omitted)")]
        password: Option<String>,
    },
}

/// Hourly prices per band.
#[derive(Args, Clone, Debug, Default)]
pub struct PricingArgs {
    #[arg(long = "six-am", help = "Price at 06:00")]
    pub six_am: Option<f64>,

    #[arg(long = "seven-to-fifteen", help = "Price from 07:00 to 15:00")]
    pub seven_to_fifteen: Option<f64>,

    #[arg(long = "sixteen-to-twenty-one", help = "Price from 16:00 to 21:00")]
    pub sixteen_to_twenty_one: Option<f64>,

    #[arg(long = "twenty-two", help = "Price at 22:00")]
    pub twenty_two: Option<f64>,

    #[arg(long = "twenty-three", help = "Price at 23:00")]
    pub twenty_three: Option<f64>,
}

impl PricingArgs {
    pub fn is_empty(&self) -> bool {
        self.six_am.is_none()
            && self.seven_to_fifteen.is_none()
            && self.sixteen_to_twenty_one.is_none()
            && self.twenty_two.is_none()
            && self.twenty_three.is_none()
    }
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// List all clients
    List,

    /// Create a client
    Add {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "phone", default_value = "")]
        phone: String,

        #[arg(long = "email", default_value = "")]
        email: String,
    },

    /// Update a client
    Edit {
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "phone")]
        phone: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,
    },

    /// Delete a client
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Booking statistics of a client
    Stats { id: String },

    /// Booking history of a client
    Bookings {
        id: String,

        #[arg(long = "status", value_enum)]
        status: Option<ArrivalStatus>,

        #[arg(long = "court", help = "Court name")]
        court: Option<String>,

        #[arg(long = "from", help = "First day (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "Last day (YYYY-MM-DD, inclusive)")]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List all users
    List,

    /// Create a user
    Add {
        #[arg(long = "name")]
        name: String,

        #[arg(long = "email")]
        email: String,

        #[arg(long = "role", value_enum, default_value_t = Role::Regular)]
        role: Role,

        #[arg(long = "password", help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Update a user (the password is never changed here)
    Edit {
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "role", value_enum)]
        role: Option<Role>,
    },

    /// Delete a user
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List registered e-mail addresses
    Emails,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClientView {
    All,
    TopBookings,
    TopAttendance,
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Client report
    Clients {
        #[arg(long = "period", value_enum, default_value_t = PeriodKind::Month)]
        period: PeriodKind,

        #[arg(long = "view", value_enum, default_value_t = ClientView::All)]
        view: ClientView,

        #[arg(long = "page", default_value_t = 1)]
        page: usize,

        #[arg(long = "per-page", help = "Rows per page (default from config)")]
        per_page: Option<usize>,
    },

    /// Financial report
    Financial {
        #[arg(long = "period", value_enum, default_value_t = PeriodKind::Month)]
        period: PeriodKind,
    },

    /// Download a report as an Excel file
    Export {
        #[arg(value_enum)]
        kind: ReportKind,

        #[arg(long = "period", value_enum, default_value_t = PeriodKind::Month)]
        period: PeriodKind,

        #[arg(long = "file", help = "Output file (default: <kind>_report_<period>.xlsx)")]
        file: Option<String>,

        #[arg(long = "force", help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
