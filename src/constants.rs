//! Application constants for the claims-expense consolidator
//!
//! File names, the output layout and the keyword set are fixed; none of them
//! can be changed at run time.

// =============================================================================
// File Names
// =============================================================================

/// Consolidated output CSV, written to the working directory
pub const OUTPUT_CSV_FILE: &str = "consolidado_despesas.csv";

/// Zip archive holding the consolidated CSV
pub const OUTPUT_ZIP_FILE: &str = "consolidado_despesas.zip";

/// Run log, truncated at the start of every run
pub const RUN_LOG_FILE: &str = "processamento.log";

/// Extension (compared case-insensitively) of candidate input files
pub const INPUT_EXTENSION: &str = ".csv";

// =============================================================================
// Keyword Filter
// =============================================================================

/// Lower-case keywords marking a claims/events expense line
pub const CLAIMS_KEYWORDS: &[&str] = &["sinistros", "despesas com eventos", "eventos/sinistros"];

// =============================================================================
// Input Layout
// =============================================================================

pub mod input {
    /// Preferred field delimiter; used whenever a line contains it
    pub const PRIMARY_DELIMITER: char = ';';

    /// Fallback field delimiter
    pub const FALLBACK_DELIMITER: char = ',';

    /// Minimum number of fields a data line must have
    pub const MIN_FIELDS: usize = 6;

    pub const DATE_INDEX: usize = 0;
    pub const REGULATORY_ID_INDEX: usize = 1;
    pub const ACCOUNT_CODE_INDEX: usize = 2;
    pub const DESCRIPTION_INDEX: usize = 3;
    /// Index 4 holds the opening balance and is ignored
    pub const AMOUNT_INDEX: usize = 5;
}

// =============================================================================
// Period Defaults
// =============================================================================

/// Quarter used when the file name is too short to carry one
pub const DEFAULT_QUARTER: &str = "1T";

/// Year used when the file name is too short to carry one
pub const DEFAULT_YEAR: &str = "2025";

// =============================================================================
// Output Layout
// =============================================================================

pub mod output {
    /// Header line of the consolidated CSV
    pub const HEADER: &str = "DATA;REG_ANS;CD_CONTA_CONTABIL;DESCRICAO;Trimestre;Ano;ValorDespesas";

    /// Field delimiter of the consolidated CSV
    pub const DELIMITER: &str = ";";

    /// Decimal places of the amount column
    pub const AMOUNT_DECIMALS: usize = 2;
}

/// Separator between the components of a consolidation key
pub const KEY_SEPARATOR: char = '_';

/// Chunk size of the streaming copy into the zip entry
pub const ARCHIVE_CHUNK_SIZE: usize = 8 * 1024;

// =============================================================================
// Logging
// =============================================================================

/// Timestamp prefix format of run log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the run start date/time written to the log
pub const RUN_START_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Directive for console diagnostics; not read from the environment
pub const CONSOLE_LOG_DIRECTIVE: &str = "ans_claims_processor=warn";
