use oxi_mambu::{MambuConfig, ServiceExecutor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let executor = ServiceExecutor::new(MambuConfig::from_env()?);
    let lines_of_credit = executor.lines_of_credit();

    let lines = lines_of_credit.get_all_lines_of_credit(Some("0"), Some("5"))?;
    println!("{} lines of credit", lines.len());

    let Some(id) = lines.first().and_then(|line| line.id.clone()) else {
        return Ok(());
    };
    let line = lines_of_credit.get_line_of_credit(&id)?;
    println!("Line of credit {id} held by {:?}", line.account_holder_key());

    let accounts = lines_of_credit.get_accounts_for_line_of_credit(&id)?;
    for loan in &accounts.loan_accounts {
        println!("Loan {:?}: {:?}", loan.id, loan.loan_amount);
    }
    for savings in &accounts.savings_accounts {
        println!("Savings {:?}: {:?}", savings.id, savings.balance);
    }

    // Re-attach the first loan to exercise both directions.
    if let Some(loan_id) = accounts.loan_accounts.first().and_then(|l| l.id.as_deref()) {
        lines_of_credit.delete_loan_account(&id, loan_id)?;
        let loan = lines_of_credit.add_loan_account(&id, loan_id)?;
        println!("Re-added loan {:?}", loan.id);
    }
    Ok(())
}
