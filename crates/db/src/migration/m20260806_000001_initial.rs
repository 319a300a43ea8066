//! Initial database migration.
//!
//! Creates all enums and tables: accounts and their groupings, parties,
//! the financial document tables, and the reconciliation tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCOUNTS & PARTIES
        // ============================================================
        db.execute_unprepared(ACCOUNT_GROUPS_SQL).await?;
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(PARTIES_SQL).await?;

        // ============================================================
        // PART 3: FINANCIAL DOCUMENTS
        // ============================================================
        db.execute_unprepared(BANK_TRANSACTIONS_SQL).await?;
        db.execute_unprepared(SALES_INVOICES_SQL).await?;
        db.execute_unprepared(SALES_PAYMENTS_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;
        db.execute_unprepared(BILLS_SQL).await?;
        db.execute_unprepared(CHECKS_SQL).await?;
        db.execute_unprepared(JOURNAL_ENTRIES_SQL).await?;
        db.execute_unprepared(JOURNAL_ENTRY_LINES_SQL).await?;

        // ============================================================
        // PART 4: RECONCILIATION
        // ============================================================
        db.execute_unprepared(RECONCILE_STATEMENTS_SQL).await?;
        db.execute_unprepared(RECONCILE_TRANSACTIONS_SQL).await?;
        db.execute_unprepared(RECONCILIATIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Normal balance side
CREATE TYPE account_side AS ENUM (
    'debit',
    'credit'
);

-- Account lifecycle status
CREATE TYPE account_status AS ENUM (
    'active',
    'inactive'
);

-- Party kind
CREATE TYPE party_kind AS ENUM (
    'customer',
    'vendor',
    'staff'
);

-- Bill/check money flow direction
CREATE TYPE flow_direction AS ENUM (
    'withdrawal',
    'deposit'
);

-- Reconcile transaction line kind
CREATE TYPE reconcile_transaction_kind AS ENUM (
    'deposit',
    'cheque_expense'
);

-- Reconciliation status ('discrepancy' is declared but never derived)
CREATE TYPE reconciliation_status AS ENUM (
    'pending',
    'completed',
    'discrepancy'
);
";

const ACCOUNT_GROUPS_SQL: &str = r"
CREATE TABLE account_groups (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    name VARCHAR(255),
    number VARCHAR(255),
    account_group_id UUID REFERENCES account_groups(id) ON DELETE SET NULL,
    normal_side account_side NOT NULL DEFAULT 'debit',
    detail_type VARCHAR(50),
    description TEXT,
    bank_name VARCHAR(255),
    balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    status account_status NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const PARTIES_SQL: &str = r"
CREATE TABLE parties (
    id UUID PRIMARY KEY,
    kind party_kind NOT NULL DEFAULT 'customer',
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255),
    phone VARCHAR(50),
    address TEXT,
    status VARCHAR(50) NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const BANK_TRANSACTIONS_SQL: &str = r"
CREATE TABLE bank_transactions (
    id UUID PRIMARY KEY,
    account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    date DATE NOT NULL,
    payee_id UUID REFERENCES parties(id) ON DELETE SET NULL,
    description TEXT,
    withdrawal NUMERIC(14, 2) NOT NULL DEFAULT 0,
    deposit NUMERIC(14, 2) NOT NULL DEFAULT 0,
    cleared BOOLEAN NOT NULL DEFAULT FALSE,
    status VARCHAR(50) NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_bank_transactions_account ON bank_transactions(account_id);
CREATE INDEX idx_bank_transactions_date ON bank_transactions(date);
";

const SALES_INVOICES_SQL: &str = r"
CREATE TABLE sales_invoices (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    customer_id UUID REFERENCES parties(id) ON DELETE SET NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'open',
    debit_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    credit_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_sales_invoices_customer ON sales_invoices(customer_id);
";

const SALES_PAYMENTS_SQL: &str = r"
CREATE TABLE sales_payments (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    payment_mode VARCHAR(50) NOT NULL,
    invoice_id UUID REFERENCES sales_invoices(id) ON DELETE SET NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'paid',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_sales_payments_invoice ON sales_payments(invoice_id);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    date DATE NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    category VARCHAR(255) NOT NULL,
    payment_mode VARCHAR(50) NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'recorded',
    account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const BILLS_SQL: &str = r"
CREATE TABLE bills (
    id UUID PRIMARY KEY,
    vendor_id UUID NOT NULL REFERENCES parties(id) ON DELETE CASCADE,
    bill_date DATE NOT NULL,
    reference VARCHAR(100) NOT NULL,
    memo TEXT,
    due_date DATE NOT NULL,
    debit_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    credit_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    amount NUMERIC(14, 2) NOT NULL,
    direction flow_direction NOT NULL DEFAULT 'withdrawal',
    status VARCHAR(50) NOT NULL DEFAULT 'open',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_bills_vendor ON bills(vendor_id);
";

const CHECKS_SQL: &str = r"
CREATE TABLE checks (
    id UUID PRIMARY KEY,
    bank_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    check_number VARCHAR(50) NOT NULL,
    pay_to_account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    amount NUMERIC(14, 2) NOT NULL,
    memo TEXT,
    date DATE NOT NULL,
    vendor_id UUID REFERENCES parties(id) ON DELETE SET NULL,
    direction flow_direction NOT NULL DEFAULT 'withdrawal',
    status VARCHAR(50) NOT NULL DEFAULT 'issued',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const JOURNAL_ENTRIES_SQL: &str = r"
CREATE TABLE journal_entries (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const JOURNAL_ENTRY_LINES_SQL: &str = r"
CREATE TABLE journal_entry_lines (
    id UUID PRIMARY KEY,
    journal_entry_id UUID NOT NULL REFERENCES journal_entries(id) ON DELETE CASCADE,
    account_id UUID REFERENCES accounts(id) ON DELETE SET NULL,
    debit NUMERIC(14, 2) NOT NULL DEFAULT 0,
    credit NUMERIC(14, 2) NOT NULL DEFAULT 0,
    description TEXT
);

CREATE INDEX idx_journal_entry_lines_entry ON journal_entry_lines(journal_entry_id);
";

const RECONCILE_STATEMENTS_SQL: &str = r"
CREATE TABLE reconcile_statements (
    id UUID PRIMARY KEY,
    account_id UUID NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
    beginning_balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    ending_balance NUMERIC(14, 2) NOT NULL,
    ending_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Statement chaining looks up the prior statement by account and ending_date
CREATE INDEX idx_reconcile_statements_account_date
    ON reconcile_statements(account_id, ending_date);
";

const RECONCILE_TRANSACTIONS_SQL: &str = r"
CREATE TABLE reconcile_transactions (
    id UUID PRIMARY KEY,
    statement_id UUID NOT NULL REFERENCES reconcile_statements(id) ON DELETE CASCADE,
    kind reconcile_transaction_kind NOT NULL,
    payment_amount NUMERIC(14, 2) NOT NULL DEFAULT 0,
    deposit_amount NUMERIC(14, 2) NOT NULL DEFAULT 0,
    is_cleared BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_reconcile_transactions_statement
    ON reconcile_transactions(statement_id);
";

const RECONCILIATIONS_SQL: &str = r"
CREATE TABLE reconciliations (
    id UUID PRIMARY KEY,
    statement_id UUID NOT NULL UNIQUE REFERENCES reconcile_statements(id) ON DELETE CASCADE,
    status reconciliation_status NOT NULL DEFAULT 'pending',
    adjustment_amount NUMERIC(14, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS reconciliations;
DROP TABLE IF EXISTS reconcile_transactions;
DROP TABLE IF EXISTS reconcile_statements;
DROP TABLE IF EXISTS journal_entry_lines;
DROP TABLE IF EXISTS journal_entries;
DROP TABLE IF EXISTS checks;
DROP TABLE IF EXISTS bills;
DROP TABLE IF EXISTS expenses;
DROP TABLE IF EXISTS sales_payments;
DROP TABLE IF EXISTS sales_invoices;
DROP TABLE IF EXISTS bank_transactions;
DROP TABLE IF EXISTS parties;
DROP TABLE IF EXISTS accounts;
DROP TABLE IF EXISTS account_groups;

DROP TYPE IF EXISTS reconciliation_status;
DROP TYPE IF EXISTS reconcile_transaction_kind;
DROP TYPE IF EXISTS flow_direction;
DROP TYPE IF EXISTS party_kind;
DROP TYPE IF EXISTS account_status;
DROP TYPE IF EXISTS account_side;
";
