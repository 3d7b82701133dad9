mod precedence;
