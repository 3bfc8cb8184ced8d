mod question_bank;
