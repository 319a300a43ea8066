//! Document repositories: the mutation hooks around every financial
//! document.
//!
//! Each method runs capture -> persist -> apply (or reverse -> delete) in a
//! single database transaction. The pre-mutation snapshot is taken from the
//! locked document row before the write; the balance plan produced by the
//! core adapter is then applied to the account rows, and for new bills and
//! checks the synthesized bank transaction is inserted through the same path
//! a user-created bank transaction takes.
//!
//! Amount fields are editable in place. Reassigning a document's target
//! accounts is not: a delta computed against the new accounts would leave
//! the old ones permanently shifted. Delete and recreate instead.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use ledgerkit_core::documents::{
    AmountSnapshot, BalancePlan, BankFeedDraft, FlowSnapshot, SplitSnapshot, bank_transaction,
    bank_transaction::BankTransactionView, bill, bill::BillView, check, check::CheckView, expense,
    expense::ExpenseView, journal_line, journal_line::JournalLineView, sales_invoice,
    sales_invoice::SalesInvoiceView, sales_payment, sales_payment::SalesPaymentView,
};
use ledgerkit_shared::types::{AccountId, PartyId};

use super::ledger::apply_postings;
use crate::entities::{
    bank_transactions, bills, checks, expenses, journal_entries, journal_entry_lines,
    sales_invoices, sales_payments, sea_orm_active_enums::FlowDirection,
};

/// Error types for document operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Document not found.
    #[error("Document not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a bank transaction.
#[derive(Debug, Clone)]
pub struct CreateBankTransactionInput {
    /// Target account.
    pub account_id: Option<Uuid>,
    /// Transaction date.
    pub date: NaiveDate,
    /// Payee party.
    pub payee_id: Option<Uuid>,
    /// Description.
    pub description: Option<String>,
    /// Withdrawal amount.
    pub withdrawal: Decimal,
    /// Deposit amount.
    pub deposit: Decimal,
}

/// Input for creating a sales invoice.
#[derive(Debug, Clone)]
pub struct CreateSalesInvoiceInput {
    /// Invoice date.
    pub date: NaiveDate,
    /// Invoice amount.
    pub amount: Decimal,
    /// Customer party.
    pub customer_id: Option<Uuid>,
    /// Debit-side (receivable) account.
    pub debit_account_id: Option<Uuid>,
    /// Credit-side (revenue) account.
    pub credit_account_id: Option<Uuid>,
}

/// Input for creating a sales payment.
#[derive(Debug, Clone)]
pub struct CreateSalesPaymentInput {
    /// Payment date.
    pub date: NaiveDate,
    /// Payment amount.
    pub amount: Decimal,
    /// Payment mode (cash, transfer, ...).
    pub payment_mode: String,
    /// The invoice being paid.
    pub invoice_id: Option<Uuid>,
}

/// Input for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Expense name.
    pub name: String,
    /// Expense date.
    pub date: NaiveDate,
    /// Expense amount.
    pub amount: Decimal,
    /// Category.
    pub category: String,
    /// Payment mode.
    pub payment_mode: String,
    /// Linked expense account.
    pub account_id: Option<Uuid>,
}

/// Input for creating a bill.
#[derive(Debug, Clone)]
pub struct CreateBillInput {
    /// Vendor party.
    pub vendor_id: Uuid,
    /// Bill date.
    pub bill_date: NaiveDate,
    /// Reference number.
    pub reference: String,
    /// Optional memo.
    pub memo: Option<String>,
    /// Due date.
    pub due_date: NaiveDate,
    /// Debit-side account.
    pub debit_account_id: Option<Uuid>,
    /// Credit-side (payable) account.
    pub credit_account_id: Option<Uuid>,
    /// Bill amount.
    pub amount: Decimal,
    /// Withdrawal or deposit.
    pub direction: FlowDirection,
}

/// Input for creating a check.
#[derive(Debug, Clone)]
pub struct CreateCheckInput {
    /// Bank account the check draws on.
    pub bank_account_id: Option<Uuid>,
    /// Check number.
    pub check_number: String,
    /// Account the check pays into.
    pub pay_to_account_id: Option<Uuid>,
    /// Check amount.
    pub amount: Decimal,
    /// Optional memo.
    pub memo: Option<String>,
    /// Check date.
    pub date: NaiveDate,
    /// Vendor party.
    pub vendor_id: Option<Uuid>,
    /// Withdrawal or deposit.
    pub direction: FlowDirection,
}

/// One line of a journal entry.
#[derive(Debug, Clone)]
pub struct JournalLineInput {
    /// Linked account.
    pub account_id: Option<Uuid>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Description.
    pub description: Option<String>,
}

/// Input for creating a journal entry with its lines.
#[derive(Debug, Clone)]
pub struct CreateJournalEntryInput {
    /// Entry date.
    pub date: NaiveDate,
    /// Description.
    pub description: Option<String>,
    /// Lines to create.
    pub lines: Vec<JournalLineInput>,
}

/// A created journal entry with its lines.
#[derive(Debug, Clone)]
pub struct JournalEntryWithLines {
    /// The entry header.
    pub entry: journal_entries::Model,
    /// The lines.
    pub lines: Vec<journal_entry_lines::Model>,
}

/// Document repository: every financial document's create/update/delete,
/// with the ledger side effects in the same transaction.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    db: DatabaseConnection,
}

impl DocumentRepository {
    /// Creates a new document repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ========================================================================
    // Bank transactions
    // ========================================================================

    /// Creates a bank transaction and applies its net delta.
    pub async fn create_bank_transaction(
        &self,
        input: CreateBankTransactionInput,
    ) -> Result<bank_transactions::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = bank_transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(input.account_id),
            date: Set(input.date),
            payee_id: Set(input.payee_id),
            description: Set(input.description),
            withdrawal: Set(input.withdrawal),
            deposit: Set(input.deposit),
            cleared: Set(false),
            status: Set("pending".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let plan = bank_transaction::on_saved(&bank_transaction_view(&model), &FlowSnapshot::zero());
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates a bank transaction's amounts, applying only the difference.
    pub async fn update_bank_transaction_amounts(
        &self,
        id: Uuid,
        withdrawal: Decimal,
        deposit: Decimal,
    ) -> Result<bank_transactions::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = bank_transactions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        // Capture before the write; the adapter never re-reads.
        let previous = bank_transaction::capture(&bank_transaction_view(&model));

        let mut active: bank_transactions::ActiveModel = model.into();
        active.withdrawal = Set(withdrawal);
        active.deposit = Set(deposit);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = bank_transaction::on_saved(&bank_transaction_view(&updated), &previous);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a bank transaction, reversing its current contribution.
    pub async fn delete_bank_transaction(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = bank_transactions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = bank_transaction::on_deleted(&bank_transaction_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Sales invoices
    // ========================================================================

    /// Creates a sales invoice, debiting the receivable and crediting the
    /// revenue account.
    pub async fn create_sales_invoice(
        &self,
        input: CreateSalesInvoiceInput,
    ) -> Result<sales_invoices::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = sales_invoices::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            amount: Set(input.amount),
            customer_id: Set(input.customer_id),
            status: Set("open".to_string()),
            debit_account_id: Set(input.debit_account_id),
            credit_account_id: Set(input.credit_account_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let plan = sales_invoice::on_saved(&sales_invoice_view(&model), &AmountSnapshot::zero());
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates a sales invoice's amount.
    pub async fn update_sales_invoice_amount(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<sales_invoices::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = sales_invoices::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let previous = sales_invoice::capture(&sales_invoice_view(&model));

        let mut active: sales_invoices::ActiveModel = model.into();
        active.amount = Set(amount);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = sales_invoice::on_saved(&sales_invoice_view(&updated), &previous);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a sales invoice, reversing its contribution on both legs.
    pub async fn delete_sales_invoice(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = sales_invoices::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = sales_invoice::on_deleted(&sales_invoice_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Sales payments
    // ========================================================================

    /// Creates a sales payment, reducing the linked invoice's receivable.
    pub async fn create_sales_payment(
        &self,
        input: CreateSalesPaymentInput,
    ) -> Result<sales_payments::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = sales_payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            amount: Set(input.amount),
            payment_mode: Set(input.payment_mode),
            invoice_id: Set(input.invoice_id),
            status: Set("paid".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let receivable = receivable_account_for(&txn, model.invoice_id).await?;
        let view = sales_payment_view(&model, receivable);
        let plan = sales_payment::on_saved(&view, &AmountSnapshot::zero());
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates a sales payment's amount.
    pub async fn update_sales_payment_amount(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<sales_payments::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = sales_payments::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let receivable = receivable_account_for(&txn, model.invoice_id).await?;
        let previous = sales_payment::capture(&sales_payment_view(&model, receivable));

        let mut active: sales_payments::ActiveModel = model.into();
        active.amount = Set(amount);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = sales_payment::on_saved(&sales_payment_view(&updated, receivable), &previous);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a sales payment, restoring the receivable.
    pub async fn delete_sales_payment(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = sales_payments::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let receivable = receivable_account_for(&txn, model.invoice_id).await?;
        let plan = sales_payment::on_deleted(&sales_payment_view(&model, receivable));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Expenses
    // ========================================================================

    /// Creates an expense and applies it to the linked account.
    pub async fn create_expense(
        &self,
        input: CreateExpenseInput,
    ) -> Result<expenses::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            date: Set(input.date),
            amount: Set(input.amount),
            category: Set(input.category),
            payment_mode: Set(input.payment_mode),
            status: Set("recorded".to_string()),
            account_id: Set(input.account_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let plan = expense::on_saved(&expense_view(&model), &AmountSnapshot::zero());
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates an expense's amount.
    pub async fn update_expense_amount(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<expenses::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = expenses::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let previous = expense::capture(&expense_view(&model));

        let mut active: expenses::ActiveModel = model.into();
        active.amount = Set(amount);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = expense::on_saved(&expense_view(&updated), &previous);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes an expense, reversing its contribution.
    pub async fn delete_expense(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = expenses::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = expense::on_deleted(&expense_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Bills
    // ========================================================================

    /// Creates a bill. Both account legs are posted, and one pending bank
    /// transaction is synthesized against the credit account.
    pub async fn create_bill(&self, input: CreateBillInput) -> Result<bills::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = bills::ActiveModel {
            id: Set(Uuid::new_v4()),
            vendor_id: Set(input.vendor_id),
            bill_date: Set(input.bill_date),
            reference: Set(input.reference),
            memo: Set(input.memo),
            due_date: Set(input.due_date),
            debit_account_id: Set(input.debit_account_id),
            credit_account_id: Set(input.credit_account_id),
            amount: Set(input.amount),
            direction: Set(input.direction),
            status: Set("open".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let plan = bill::on_saved(&bill_view(&model), &AmountSnapshot::zero(), true);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates a bill's amount. No bank transaction is synthesized on update.
    pub async fn update_bill_amount(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<bills::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = bills::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let previous = bill::capture(&bill_view(&model));

        let mut active: bills::ActiveModel = model.into();
        active.amount = Set(amount);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = bill::on_saved(&bill_view(&updated), &previous, false);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a bill, reversing its contribution on both legs. The bank
    /// transaction synthesized at creation stays and must be removed through
    /// its own delete, which reverses its own delta.
    pub async fn delete_bill(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = bills::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = bill::on_deleted(&bill_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// Creates a check. The bank leg decreases, the pay-to leg increases,
    /// and one pending bank transaction is synthesized against the bank
    /// account.
    pub async fn create_check(
        &self,
        input: CreateCheckInput,
    ) -> Result<checks::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let model = checks::ActiveModel {
            id: Set(Uuid::new_v4()),
            bank_account_id: Set(input.bank_account_id),
            check_number: Set(input.check_number),
            pay_to_account_id: Set(input.pay_to_account_id),
            amount: Set(input.amount),
            memo: Set(input.memo),
            date: Set(input.date),
            vendor_id: Set(input.vendor_id),
            direction: Set(input.direction),
            status: Set("issued".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let plan = check::on_saved(&check_view(&model), &AmountSnapshot::zero(), true);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Updates a check's amount.
    pub async fn update_check_amount(
        &self,
        id: Uuid,
        amount: Decimal,
    ) -> Result<checks::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = checks::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let previous = check::capture(&check_view(&model));

        let mut active: checks::ActiveModel = model.into();
        active.amount = Set(amount);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        let plan = check::on_saved(&check_view(&updated), &previous, false);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a check, restoring both the bank and the pay-to account.
    pub async fn delete_check(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = checks::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = check::on_deleted(&check_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Journal entries
    // ========================================================================

    /// Creates a journal entry with its lines, applying each line's raw
    /// `debit - credit` delta.
    pub async fn create_journal_entry(
        &self,
        input: CreateJournalEntryInput,
    ) -> Result<JournalEntryWithLines, DocumentError> {
        let txn = self.db.begin().await?;

        let now = Utc::now().into();
        let entry = journal_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let mut lines = Vec::with_capacity(input.lines.len());
        for line_input in input.lines {
            let line = journal_entry_lines::ActiveModel {
                id: Set(Uuid::new_v4()),
                journal_entry_id: Set(entry.id),
                account_id: Set(line_input.account_id),
                debit: Set(line_input.debit),
                credit: Set(line_input.credit),
                description: Set(line_input.description),
            }
            .insert(&txn)
            .await?;

            let plan = journal_line::on_saved(&journal_line_view(&line), &SplitSnapshot::zero());
            apply_plan(&txn, &plan).await?;
            lines.push(line);
        }

        txn.commit().await?;
        Ok(JournalEntryWithLines { entry, lines })
    }

    /// Updates a journal line's debit/credit amounts.
    pub async fn update_journal_line_amounts(
        &self,
        id: Uuid,
        debit: Decimal,
        credit: Decimal,
    ) -> Result<journal_entry_lines::Model, DocumentError> {
        let txn = self.db.begin().await?;

        let model = journal_entry_lines::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let previous = journal_line::capture(&journal_line_view(&model));

        let mut active: journal_entry_lines::ActiveModel = model.into();
        active.debit = Set(debit);
        active.credit = Set(credit);
        let updated = active.update(&txn).await?;

        let plan = journal_line::on_saved(&journal_line_view(&updated), &previous);
        apply_plan(&txn, &plan).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a journal line, reversing its contribution.
    pub async fn delete_journal_line(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let model = journal_entry_lines::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let plan = journal_line::on_deleted(&journal_line_view(&model));
        apply_plan(&txn, &plan).await?;
        model.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Deletes a journal entry, reversing every line before the cascade
    /// removes them.
    pub async fn delete_journal_entry(&self, id: Uuid) -> Result<(), DocumentError> {
        let txn = self.db.begin().await?;

        let entry = journal_entries::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DocumentError::NotFound(id))?;

        let lines = journal_entry_lines::Entity::find()
            .filter(journal_entry_lines::Column::JournalEntryId.eq(id))
            .all(&txn)
            .await?;
        for line in &lines {
            let plan = journal_line::on_deleted(&journal_line_view(line));
            apply_plan(&txn, &plan).await?;
        }

        entry.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

// ============================================================================
// Plan application
// ============================================================================

/// Applies a balance plan: every posting leg, then the synthesized bank
/// transaction (which posts its own raw delta, exactly like a user-created
/// one).
async fn apply_plan(txn: &DatabaseTransaction, plan: &BalancePlan) -> Result<(), DbErr> {
    apply_postings(txn, &plan.postings).await?;

    if let Some(draft) = &plan.bank_feed {
        insert_bank_feed(txn, draft).await?;
    }

    Ok(())
}

/// Inserts the synthesized bank transaction and applies its net delta.
async fn insert_bank_feed(txn: &DatabaseTransaction, draft: &BankFeedDraft) -> Result<(), DbErr> {
    let now = Utc::now().into();
    let model = bank_transactions::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(draft.account.map(AccountId::into_inner)),
        date: Set(draft.date),
        payee_id: Set(draft.payee.map(PartyId::into_inner)),
        description: Set(Some(draft.description.clone())),
        withdrawal: Set(draft.withdrawal),
        deposit: Set(draft.deposit),
        cleared: Set(false),
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    let plan = bank_transaction::on_saved(&bank_transaction_view(&model), &FlowSnapshot::zero());
    apply_postings(txn, &plan.postings).await
}

/// Resolves a payment's receivable account through its invoice. A missing
/// invoice, or an invoice without a debit account, resolves to `None`.
async fn receivable_account_for(
    txn: &DatabaseTransaction,
    invoice_id: Option<Uuid>,
) -> Result<Option<Uuid>, DbErr> {
    let Some(invoice_id) = invoice_id else {
        return Ok(None);
    };
    let invoice = sales_invoices::Entity::find_by_id(invoice_id).one(txn).await?;
    Ok(invoice.and_then(|i| i.debit_account_id))
}

// ============================================================================
// View builders: entity model -> adapter view
// ============================================================================

fn bank_transaction_view(model: &bank_transactions::Model) -> BankTransactionView {
    BankTransactionView {
        account: model.account_id.map(AccountId::from_uuid),
        withdrawal: model.withdrawal,
        deposit: model.deposit,
    }
}

fn sales_invoice_view(model: &sales_invoices::Model) -> SalesInvoiceView {
    SalesInvoiceView {
        amount: model.amount,
        debit_account: model.debit_account_id.map(AccountId::from_uuid),
        credit_account: model.credit_account_id.map(AccountId::from_uuid),
    }
}

fn sales_payment_view(
    model: &sales_payments::Model,
    receivable_account: Option<Uuid>,
) -> SalesPaymentView {
    SalesPaymentView {
        amount: model.amount,
        receivable_account: receivable_account.map(AccountId::from_uuid),
    }
}

fn expense_view(model: &expenses::Model) -> ExpenseView {
    ExpenseView {
        amount: model.amount,
        account: model.account_id.map(AccountId::from_uuid),
    }
}

fn bill_view(model: &bills::Model) -> BillView {
    BillView {
        amount: model.amount,
        debit_account: model.debit_account_id.map(AccountId::from_uuid),
        credit_account: model.credit_account_id.map(AccountId::from_uuid),
        direction: model.direction.clone().into(),
        bill_date: model.bill_date,
        vendor: Some(PartyId::from_uuid(model.vendor_id)),
        reference: model.reference.clone(),
        memo: model.memo.clone(),
    }
}

fn check_view(model: &checks::Model) -> CheckView {
    CheckView {
        amount: model.amount,
        bank_account: model.bank_account_id.map(AccountId::from_uuid),
        pay_to: model.pay_to_account_id.map(AccountId::from_uuid),
        direction: model.direction.clone().into(),
        date: model.date,
        vendor: model.vendor_id.map(PartyId::from_uuid),
        check_number: model.check_number.clone(),
        memo: model.memo.clone(),
    }
}

fn journal_line_view(model: &journal_entry_lines::Model) -> JournalLineView {
    JournalLineView {
        account: model.account_id.map(AccountId::from_uuid),
        debit: model.debit,
        credit: model.credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_core::documents::FlowDirection as CoreFlowDirection;
    use rust_decimal_macros::dec;

    fn bill_model(amount: Decimal) -> bills::Model {
        let now = Utc::now().into();
        bills::Model {
            id: Uuid::new_v4(),
            vendor_id: Uuid::new_v4(),
            bill_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            reference: "B-77".to_string(),
            memo: None,
            due_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            debit_account_id: Some(Uuid::new_v4()),
            credit_account_id: Some(Uuid::new_v4()),
            amount,
            direction: FlowDirection::Withdrawal,
            status: "open".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_bill_view_maps_accounts_and_direction() {
        let model = bill_model(dec!(300));
        let view = bill_view(&model);

        assert_eq!(view.amount, dec!(300));
        assert_eq!(
            view.debit_account.map(AccountId::into_inner),
            model.debit_account_id
        );
        assert_eq!(
            view.credit_account.map(AccountId::into_inner),
            model.credit_account_id
        );
        assert_eq!(view.direction, CoreFlowDirection::Withdrawal);
        assert_eq!(view.reference, "B-77");
    }

    #[test]
    fn test_bill_create_plan_targets_credit_account_feed() {
        let model = bill_model(dec!(300));
        let plan = bill::on_saved(&bill_view(&model), &AmountSnapshot::zero(), true);

        let feed = plan.bank_feed.expect("bill creation synthesizes a feed");
        assert_eq!(
            feed.account.map(AccountId::into_inner),
            model.credit_account_id
        );
        assert_eq!(feed.withdrawal, dec!(300));
        assert_eq!(feed.deposit, dec!(0));
        assert_eq!(feed.description, "Bill B-77");
    }

    #[test]
    fn test_bank_transaction_view_handles_unlinked_account() {
        let now = Utc::now().into();
        let model = bank_transactions::Model {
            id: Uuid::new_v4(),
            account_id: None,
            date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            payee_id: None,
            description: None,
            withdrawal: dec!(10),
            deposit: dec!(0),
            cleared: false,
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(bank_transaction_view(&model).account.is_none());
    }

    #[test]
    fn test_journal_line_view_maps_amounts() {
        let model = journal_entry_lines::Model {
            id: Uuid::new_v4(),
            journal_entry_id: Uuid::new_v4(),
            account_id: Some(Uuid::new_v4()),
            debit: dec!(120),
            credit: dec!(20),
            description: None,
        };
        let view = journal_line_view(&model);
        assert_eq!(view.debit, dec!(120));
        assert_eq!(view.credit, dec!(20));
    }
}
